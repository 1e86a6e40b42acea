use yew::prelude::*;

use crate::components::contact_form::ContactSection;

const SERVICES: [(&str, &str); 3] = [
    ("Caldaie", "Installazione, manutenzione e riparazione di caldaie a gas e a condensazione."),
    ("Idraulica", "Perdite, scarichi otturati e rifacimento bagni con preventivo gratuito."),
    ("Climatizzazione", "Condizionatori e pompe di calore, sopralluogo incluso."),
];

const STEPS: [(&str, &str); 3] = [
    ("1. Contattaci", "Descrivi il problema con il modulo qui sotto."),
    ("2. Sopralluogo", "Un tecnico ti richiama e fissa un appuntamento."),
    ("3. Intervento", "Lavoro garantito, prezzo concordato prima di iniziare."),
];

/// The whole page below the navigation. Purely static markup; every
/// interactive behavior is attached from `main` after the first render.
#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing-page">
            <style>{STYLES}</style>
            <section id="hero" class="hero">
                <h1 class="reveal">{"Impianti sicuri, interventi rapidi"}</h1>
                <p class="reveal">{"Assistenza idraulica e termica a Milano e provincia, 7 giorni su 7."}</p>
                <a href="#contatti" class="hero-cta reveal">{"Richiedi un intervento"}</a>
            </section>

            <section id="servizi" class="services">
                <h2 class="reveal">{"Servizi"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|(title, body)| html! {
                        <div class="card reveal">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="come-lavoriamo" class="steps">
                <h2 class="reveal">{"Come lavoriamo"}</h2>
                { for STEPS.iter().map(|(title, body)| html! {
                    <div class="step reveal">
                        <h3>{*title}</h3>
                        <p>{*body}</p>
                    </div>
                }) }
            </section>

            <section id="chi-siamo" class="about">
                <h2 class="reveal">{"Chi siamo"}</h2>
                <p class="reveal">
                    {"Da oltre vent'anni seguiamo famiglie e condomini con tecnici certificati e ricambi originali."}
                </p>
            </section>

            <ContactSection />

            <footer class="footer">
                <p>{"© Rossi Impianti · P.IVA 01234567890"}</p>
            </footer>
        </main>
    }
}

const STYLES: &str = r#"
    body {
        margin: 0;
        font-family: system-ui, sans-serif;
        color: #1d1d1f;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        background: transparent;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(255, 255, 255, 0.95);
        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
    }
    .nav-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        max-width: 1100px;
        margin: 0 auto;
        padding: 1rem 1.5rem;
    }
    .nav-right {
        display: flex;
        gap: 1.5rem;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        width: 24px;
        height: 2px;
        background: currentColor;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }
    .burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
    .burger-menu.open span:nth-child(2) { opacity: 0; }
    .burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
    .mobile-menu {
        position: fixed;
        inset: 0;
        z-index: 90;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 2rem;
        background: #fff;
        transform: translateX(100%);
        transition: transform 0.3s ease;
    }
    .mobile-menu.open {
        transform: translateX(0);
    }
    .reveal {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .reveal.visible {
        opacity: 1;
        transform: none;
    }
    section {
        max-width: 1100px;
        margin: 0 auto;
        padding: 5rem 1.5rem;
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 1.5rem;
    }
    .form-group {
        display: flex;
        flex-direction: column;
        margin-bottom: 1rem;
    }
    .form-group.consent {
        flex-direction: row;
        flex-wrap: wrap;
        gap: 0.5rem;
    }
    .form-group input.error,
    .form-group textarea.error {
        border-color: #d93025;
    }
    .field-error {
        color: #d93025;
        font-size: 0.85rem;
        margin-top: 0.25rem;
        width: 100%;
    }
    .submit-button:disabled {
        opacity: 0.7;
        cursor: wait;
    }
    @media (max-width: 768px) {
        .nav-right { display: none; }
        .burger-menu { display: flex; }
    }
"#;
