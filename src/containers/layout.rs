use crate::containers::header::Header;
use web_sys::window;
use yew::{Children, Html, Properties, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub on_logout: Option<yew::Callback<()>>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window()
            && let Some(document) = window.document()
            && let Some(html_element) = document.document_element()
        {
            html_element
                .set_attribute("data-theme", "dark")
                .unwrap_or_default();
        }
        || {}
    });

    html! {
        <div class="flex flex-col min-h-screen bg-base-100 text-base-content">
            <Header on_logout={props.on_logout.clone()} />
            <main class="flex-1">
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content/60 text-sm">
                <p>{"© 2025 PLC Coach · Powered by Rust and Yew"}</p>
            </footer>
        </div>
    }
}
