use leptos::prelude::*;

/// Modal frame container (overlay + centered surface).
///
/// Renders no chrome of its own: detail screens draw their own header and
/// footer, and dismissal is the owner's concern, so the overlay carries no
/// close behavior.
#[component]
pub fn ModalFrame(
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div class="modal-overlay">
            <div class=surface_class>{children()}</div>
        </div>
    }
}
