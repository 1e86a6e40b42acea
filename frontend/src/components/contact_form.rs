use yew::prelude::*;

use contact_site::config::ElementIds;

#[derive(Properties, PartialEq)]
struct FieldErrorProps {
    id: &'static str,
    message: &'static str,
}

#[function_component(FieldError)]
fn field_error(props: &FieldErrorProps) -> Html {
    html! {
        <span id={props.id} class="field-error" role="alert" style="display: none;">
            {props.message}
        </span>
    }
}

/// Contact form markup with hidden inline errors and the success panel.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let ids = ElementIds::default();

    html! {
        <section id="contatti" class="contact-section">
            <h2 class="reveal">{"Richiedi un intervento"}</h2>
            <div id={ids.form_wrapper} class="contact-form-wrapper reveal">
                <form id={ids.form} novalidate=true>
                    <div class="form-group">
                        <label for={ids.name}>{"Nome e cognome"}</label>
                        <input id={ids.name} type="text" autocomplete="name" aria-invalid="false" />
                        <FieldError id={ids.name_error} message="Inserisci almeno 2 caratteri." />
                    </div>
                    <div class="form-group">
                        <label for={ids.email}>{"Email"}</label>
                        <input id={ids.email} type="email" autocomplete="email" aria-invalid="false" />
                        <FieldError id={ids.email_error} message="Inserisci un indirizzo email valido." />
                    </div>
                    <div class="form-group">
                        <label for={ids.phone}>{"Telefono"}</label>
                        <input id={ids.phone} type="tel" autocomplete="tel" aria-invalid="false" />
                        <FieldError id={ids.phone_error} message="Inserisci un numero di telefono valido." />
                    </div>
                    <div class="form-group">
                        <label for={ids.message}>{"Descrivi il problema"}</label>
                        <textarea id={ids.message} rows="5" aria-invalid="false" />
                        <FieldError id={ids.message_error} message="Descrivi il problema in almeno 10 caratteri." />
                    </div>
                    <div class="form-group consent">
                        <input id={ids.consent} type="checkbox" />
                        <label for={ids.consent}>
                            {"Acconsento al trattamento dei dati personali secondo l'informativa privacy."}
                        </label>
                        <FieldError id={ids.consent_error} message="Per inviare la richiesta serve il consenso." />
                    </div>
                    <button id={ids.submit} type="submit" class="submit-button">
                        {"Invia richiesta"}
                    </button>
                </form>
            </div>
            <div id={ids.form_success} class="form-success" style="display: none;">
                <h3>{"Richiesta inviata!"}</h3>
                <p>{"Grazie, ti ricontatteremo entro 24 ore."}</p>
            </div>
        </section>
    }
}
