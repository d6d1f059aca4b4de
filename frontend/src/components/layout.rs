use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Dark-theme shell: top header bar with the app mark, content below.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-gray-900 flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700 h-14 flex-shrink-0 z-40">
                <div class="h-full flex items-center justify-between px-4">
                    <div class="flex items-center space-x-2">
                        <div class="w-8 h-8 bg-blue-500 rounded flex items-center justify-center">
                            <span class="text-white font-bold text-lg">{"R"}</span>
                        </div>
                        <span class="text-white font-semibold text-lg">{"Rolodex"}</span>
                    </div>
                    <span class="text-gray-400 text-sm hidden sm:block">{"Contact Manager"}</span>
                </div>
            </header>

            <main class="flex-1">
                { props.children.clone() }
            </main>
        </div>
    }
}
