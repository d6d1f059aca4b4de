use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
mod services;
mod session;

use components::layout::Layout;
use pages::contacts::ContactsPage;

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Contacts,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Contacts => html! { <ContactsPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-900">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-white">{"404"}</h1>
                    <p class="text-xl mt-4 text-gray-400">{"Page Not Found"}</p>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}

fn main() {
    let document = web_sys::window().unwrap().document().unwrap();
    let head = document.head().unwrap();

    // Load Tailwind CSS
    let tailwind = document.create_element("link").unwrap();
    tailwind
        .set_attribute(
            "href",
            "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css",
        )
        .unwrap();
    tailwind.set_attribute("rel", "stylesheet").unwrap();
    head.append_child(&tailwind).unwrap();

    yew::Renderer::<App>::new().render();
}
