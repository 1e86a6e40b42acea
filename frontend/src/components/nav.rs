use yew::prelude::*;

use contact_site::config::ElementIds;

const LINKS: [(&str, &str); 4] = [
    ("#servizi", "Servizi"),
    ("#come-lavoriamo", "Come lavoriamo"),
    ("#chi-siamo", "Chi siamo"),
    ("#contatti", "Contatti"),
];

/// Static navigation markup. Scroll styling and the mobile panel are driven
/// by the behavior units, not by component state.
#[function_component(Nav)]
pub fn nav() -> Html {
    let ids = ElementIds::default();

    html! {
        <>
            <nav id={ids.navbar} class="top-nav">
                <div class="nav-content">
                    <a href="#hero" class="nav-logo">{"Rossi Impianti"}</a>
                    <div class="nav-right">
                        { for LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} class="nav-link">{*label}</a>
                        }) }
                    </div>
                    <button
                        id={ids.hamburger}
                        class="burger-menu"
                        type="button"
                        aria-label="Apri menu"
                        aria-expanded="false"
                        aria-controls={ids.mobile_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
            <div id={ids.mobile_menu} class="mobile-menu">
                { for LINKS.iter().map(|(href, label)| html! {
                    <a href={*href} class="mobile-link">{*label}</a>
                }) }
            </div>
        </>
    }
}
