//! Mount point for the aurora render session.

use crate::domain::background::BackgroundOptions;
use leptos::html::Div;
use leptos::*;

/// Fixed full-viewport layer behind the page. The render session attaches
/// once the mount div is in the document and detaches when the component is
/// cleaned up. If WebGPU is missing the layer stays empty.
#[component]
pub fn AuroraBackground(#[prop(optional)] options: BackgroundOptions) -> impl IntoView {
    let mount_ref = create_node_ref::<Div>();

    #[cfg(target_arch = "wasm32")]
    browser::attach_on_load(mount_ref, options);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = options;

    view! { <div class="aurora-mount" aria-hidden="true" node_ref=mount_ref></div> }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use crate::application::RenderSession;
    use crate::domain::background::BackgroundOptions;
    use crate::domain::logging::LogComponent;
    use crate::infrastructure::host::BrowserHost;
    use crate::{log_info, log_warn};
    use leptos::html::Div;
    use leptos::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const COMPONENT: LogComponent = LogComponent::Page("AuroraBackground");

    pub(super) fn attach_on_load(mount_ref: NodeRef<Div>, options: BackgroundOptions) {
        let session: Rc<RefCell<Option<RenderSession<BrowserHost>>>> = Rc::default();
        let alive = Rc::new(Cell::new(true));

        mount_ref.on_load({
            let session = session.clone();
            let alive = alive.clone();
            move |div| {
                let mount = web_sys::Element::clone(&div);
                spawn_local(async move {
                    let host = Rc::new(BrowserHost::new(mount));
                    match RenderSession::attach(host, options).await {
                        // unmounted while the adapter was being acquired
                        Ok(attached) if !alive.get() => attached.detach(),
                        Ok(attached) => {
                            log_info!(COMPONENT, "Aurora background running");
                            *session.borrow_mut() = Some(attached);
                        }
                        Err(e) => log_warn!(COMPONENT, "Aurora background disabled: {}", e),
                    }
                });
            }
        });

        on_cleanup(move || {
            alive.set(false);
            let attached = session.borrow_mut().take();
            if let Some(attached) = attached {
                attached.detach();
            }
        });
    }
}
