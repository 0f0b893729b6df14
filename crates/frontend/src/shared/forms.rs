//! Native constraint-validation wiring for the data entry forms

use leptos::ev::SubmitEvent;
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

/// Submit guard shared by every form on the site.
///
/// Runs the browser's own `checkValidity()`; an invalid form has its submit
/// blocked. Either way the `was-validated` class is added so the built-in
/// field feedback becomes visible. Returns whether the form passed; a
/// submit event without a form target is a no-op returning `false`.
pub fn validate_on_submit(ev: &SubmitEvent) -> bool {
    let Some(form) = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
    else {
        return false;
    };

    let valid = form.check_validity();
    if !valid {
        ev.prevent_default();
        ev.stop_propagation();
    }
    let _ = form.class_list().add_1("was-validated");
    valid
}
