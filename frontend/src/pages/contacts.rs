use gloo::console;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use rolodex_shared::{Contact, ContactPayload};

use crate::components::notification::{Notice, NoticeKind, NotificationBanner};
use crate::services::contacts;
use crate::session::{filter_contacts, normalize_field, ContactSession, SessionAction};

#[function_component(ContactsPage)]
pub fn contacts_page() -> Html {
    let session = use_reducer(ContactSession::new);
    let loading = use_state(|| true);
    let load_failed = use_state(|| false);
    let search_query = use_state(String::new);
    let reload_tick = use_state(|| 0u32);
    let reload_seq = use_mut_ref(|| 0u32);
    let notice = use_state(|| None::<Notice>);
    let notice_seq = use_mut_ref(|| 0u32);

    // A new notice replaces whatever is currently on screen
    let show_notice = {
        let notice = notice.clone();
        let notice_seq = notice_seq.clone();
        Callback::from(move |(text, kind): (String, NoticeKind)| {
            let mut seq = notice_seq.borrow_mut();
            *seq += 1;
            notice.set(Some(Notice {
                id: *seq,
                text,
                kind,
            }));
        })
    };

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    // Every successful mutation bumps the tick, which re-runs the load effect
    let reload = {
        let reload_tick = reload_tick.clone();
        let reload_seq = reload_seq.clone();
        Callback::from(move |_: ()| {
            let mut seq = reload_seq.borrow_mut();
            *seq += 1;
            reload_tick.set(*seq);
        })
    };

    // Fetch the full list on mount and on every reload tick
    {
        let session = session.clone();
        let loading = loading.clone();
        let load_failed = load_failed.clone();
        let show_notice = show_notice.clone();

        use_effect_with(*reload_tick, move |_| {
            loading.set(true);
            spawn_local(async move {
                match contacts::list().await {
                    Ok(list) => {
                        session.dispatch(SessionAction::Loaded(list));
                        load_failed.set(false);
                    }
                    Err(err) => {
                        console::error!("Error loading contacts:", err.to_string());
                        load_failed.set(true);
                        show_notice.emit((
                            "Failed to load contacts".to_string(),
                            NoticeKind::Error,
                        ));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_search = {
        let search_query = search_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search_query.set(input.value());
        })
    };

    let on_add = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::OpenCreate))
    };

    let on_edit = {
        let session = session.clone();
        Callback::from(move |id: i32| session.dispatch(SessionAction::OpenEdit(id)))
    };

    let on_request_delete = {
        let session = session.clone();
        Callback::from(move |id: i32| session.dispatch(SessionAction::OpenDelete(id)))
    };

    let on_close_editor = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::CloseEditor))
    };

    // The form closes immediately on submit; the request outcome only drives
    // the notification and the follow-up reload
    let on_save = {
        let session = session.clone();
        let show_notice = show_notice.clone();
        let reload = reload.clone();
        Callback::from(move |payload: ContactPayload| {
            session.dispatch(SessionAction::CloseEditor);
            let show_notice = show_notice.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let result = match payload.id {
                    Some(id) => contacts::update(id, &payload)
                        .await
                        .map(|_| "Contact updated successfully!"),
                    None => contacts::create(&payload)
                        .await
                        .map(|_| "Contact added successfully!"),
                };
                match result {
                    Ok(message) => {
                        show_notice.emit((message.to_string(), NoticeKind::Success));
                        reload.emit(());
                    }
                    Err(err) => {
                        console::error!("Error saving contact:", err.to_string());
                        show_notice.emit((err.message, NoticeKind::Error));
                    }
                }
            });
        })
    };

    let visible = filter_contacts(session.contacts(), &search_query);

    let delete_modal = if let Some(target) = session.delete_target() {
        let target = target.clone();

        let on_cancel = {
            let session = session.clone();
            Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::CloseDelete))
        };

        // Confirming closes the dialog first; the request runs on its own
        let on_confirm = {
            let session = session.clone();
            let show_notice = show_notice.clone();
            let reload = reload.clone();
            let id = target.id;
            Callback::from(move |_: MouseEvent| {
                session.dispatch(SessionAction::CloseDelete);
                let show_notice = show_notice.clone();
                let reload = reload.clone();
                spawn_local(async move {
                    match contacts::delete(id).await {
                        Ok(_) => {
                            show_notice.emit((
                                "Contact deleted successfully!".to_string(),
                                NoticeKind::Success,
                            ));
                            reload.emit(());
                        }
                        Err(err) => {
                            console::error!("Error deleting contact:", err.to_string());
                            show_notice.emit((err.message, NoticeKind::Error));
                        }
                    }
                });
            })
        };

        html! { <DeleteContactModal contact={target} {on_cancel} {on_confirm} /> }
    } else {
        html! {}
    };

    html! {
        <div class="p-6 space-y-6">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-white">{"Contacts"}</h1>
                    <p class="text-gray-400">{"Manage your address book"}</p>
                </div>
                <button
                    onclick={on_add}
                    class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg flex items-center space-x-2"
                >
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4v16m8-8H4"/>
                    </svg>
                    <span>{"Add Contact"}</span>
                </button>
            </div>

            // Quick Stats
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <div class="rounded-lg p-4 bg-blue-600/20">
                    <div class="text-2xl font-bold text-blue-400">{session.total()}</div>
                    <div class="text-gray-400 text-sm">{"Total Contacts"}</div>
                </div>
                <div class="rounded-lg p-4 bg-gray-600/20">
                    <div class="text-2xl font-bold text-gray-300">{visible.len()}</div>
                    <div class="text-gray-400 text-sm">{"Showing"}</div>
                </div>
            </div>

            // Search
            <div class="bg-gray-800 rounded-lg border border-gray-700 p-4">
                <div class="relative">
                    <svg class="absolute left-3 top-1/2 transform -translate-y-1/2 w-4 h-4 text-gray-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"/>
                    </svg>
                    <input
                        type="text"
                        placeholder="Search by name, phone, or email..."
                        value={(*search_query).clone()}
                        oninput={on_search}
                        class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg pl-10 pr-4 py-2 text-sm focus:ring-blue-500 focus:border-blue-500"
                    />
                </div>
            </div>

            // Contacts Table
            <div class="bg-gray-800 rounded-lg border border-gray-700 overflow-hidden">
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-700">
                        <thead class="bg-gray-900">
                            <tr>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">{"ID"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">{"Name"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">{"Phone"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">{"Email"}</th>
                                <th class="px-4 py-3 text-left text-xs font-medium text-gray-400 uppercase tracking-wider">{"Address"}</th>
                                <th class="px-4 py-3 text-right text-xs font-medium text-gray-400 uppercase tracking-wider">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-700">
                            if *loading {
                                <tr>
                                    <td colspan="6" class="px-4 py-12">
                                        <div class="flex justify-center items-center">
                                            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-500"></div>
                                        </div>
                                    </td>
                                </tr>
                            } else if *load_failed {
                                <tr>
                                    <td colspan="6" class="px-4 py-12 text-center text-gray-400">
                                        {"Failed to load contacts. Please try again."}
                                    </td>
                                </tr>
                            } else if visible.is_empty() {
                                <tr>
                                    <td colspan="6" class="px-4 py-12 text-center text-gray-400">
                                        {"No contacts found"}
                                    </td>
                                </tr>
                            } else {
                                {for visible.iter().map(|contact| {
                                    html! {
                                        <ContactRow
                                            contact={contact.clone()}
                                            on_edit={on_edit.clone()}
                                            on_delete={on_request_delete.clone()}
                                        />
                                    }
                                })}
                            }
                        </tbody>
                    </table>
                </div>
            </div>

            // Create / Edit Modal
            if session.editor_open() {
                <ContactFormModal
                    prefill={session.edit_target().cloned()}
                    on_close={on_close_editor}
                    on_save={on_save}
                />
            }

            // Delete Confirmation Modal
            {delete_modal}

            <NotificationBanner notice={(*notice).clone()} on_dismiss={dismiss_notice} />
        </div>
    }
}

// ===== Contact Row =====

#[derive(Properties, PartialEq)]
struct ContactRowProps {
    contact: Contact,
    on_edit: Callback<i32>,
    on_delete: Callback<i32>,
}

#[function_component(ContactRow)]
fn contact_row(props: &ContactRowProps) -> Html {
    let contact = &props.contact;

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let id = contact.id;
        Callback::from(move |_: MouseEvent| on_edit.emit(id))
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = contact.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <tr class="hover:bg-gray-700/50 transition-colors">
            <td class="px-4 py-3">
                <span class="text-blue-400 font-medium">{"#"}{contact.id}</span>
            </td>
            <td class="px-4 py-3">
                <span class="text-white font-medium">{contact.display_name()}</span>
            </td>
            <td class="px-4 py-3">
                <span class="text-gray-300 font-mono">{&contact.phone}</span>
            </td>
            <td class="px-4 py-3">
                <span class="text-gray-300">{contact.email.as_deref().unwrap_or("N/A")}</span>
            </td>
            <td class="px-4 py-3">
                <span class="text-gray-400">{contact.address.as_deref().unwrap_or("N/A")}</span>
            </td>
            <td class="px-4 py-3 text-right">
                <div class="flex items-center justify-end space-x-2">
                    <button onclick={on_edit} class="text-blue-400 hover:text-blue-300 text-sm">
                        {"Edit"}
                    </button>
                    <button onclick={on_delete} class="text-red-400 hover:text-red-300 text-sm">
                        {"Delete"}
                    </button>
                </div>
            </td>
        </tr>
    }
}

// ===== Create / Edit Modal =====

fn input_value(state: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[derive(Properties, PartialEq)]
struct ContactFormModalProps {
    /// Contact whose data pre-fills the form when editing; `None` on create.
    prefill: Option<Contact>,
    on_close: Callback<MouseEvent>,
    on_save: Callback<ContactPayload>,
}

#[function_component(ContactFormModal)]
fn contact_form_modal(props: &ContactFormModalProps) -> Html {
    let prefill = props.prefill.as_ref();
    let first_name = use_state(|| prefill.map(|c| c.first_name.clone()).unwrap_or_default());
    let last_name =
        use_state(|| prefill.and_then(|c| c.last_name.clone()).unwrap_or_default());
    let phone = use_state(|| prefill.map(|c| c.phone.clone()).unwrap_or_default());
    let email = use_state(|| prefill.and_then(|c| c.email.clone()).unwrap_or_default());
    let address = use_state(|| prefill.and_then(|c| c.address.clone()).unwrap_or_default());

    let title = if props.prefill.is_some() {
        "Edit Contact"
    } else {
        "Add New Contact"
    };

    let on_submit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let phone = phone.clone();
        let email = email.clone();
        let address = address.clone();
        let edit_id = props.prefill.as_ref().map(|c| c.id);
        let on_save = props.on_save.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Only trimming happens here; real validation is the server's job
            let payload = ContactPayload {
                id: edit_id,
                first_name: first_name.trim().to_string(),
                last_name: normalize_field(&last_name),
                phone: phone.trim().to_string(),
                email: normalize_field(&email),
                address: normalize_field(&address),
            };
            on_save.emit(payload);
        })
    };

    html! {
        <div class="fixed inset-0 z-50 overflow-y-auto">
            <div class="flex min-h-full items-center justify-center p-4">
                // Backdrop
                <div class="fixed inset-0 bg-black/50" onclick={props.on_close.clone()}></div>

                // Modal
                <div class="relative bg-gray-800 rounded-lg shadow-xl border border-gray-700 w-full max-w-lg">
                    <div class="px-6 py-4 border-b border-gray-700 flex items-center justify-between">
                        <h3 class="text-lg font-medium text-white">{title}</h3>
                        <button onclick={props.on_close.clone()} class="text-gray-400 hover:text-white">
                            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                            </svg>
                        </button>
                    </div>

                    <form onsubmit={on_submit}>
                        <div class="p-6 space-y-4">
                            <div class="grid grid-cols-2 gap-4">
                                <div>
                                    <label class="block text-sm font-medium text-gray-300 mb-1">{"First Name"}</label>
                                    <input
                                        type="text"
                                        required=true
                                        value={(*first_name).clone()}
                                        oninput={input_value(first_name.clone())}
                                        class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                                        placeholder="First name"
                                    />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-gray-300 mb-1">{"Last Name"}</label>
                                    <input
                                        type="text"
                                        value={(*last_name).clone()}
                                        oninput={input_value(last_name.clone())}
                                        class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                                        placeholder="Last name"
                                    />
                                </div>
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-300 mb-1">{"Phone"}</label>
                                <input
                                    type="tel"
                                    required=true
                                    value={(*phone).clone()}
                                    oninput={input_value(phone.clone())}
                                    class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                                    placeholder="Phone number"
                                />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-300 mb-1">{"Email"}</label>
                                <input
                                    type="email"
                                    value={(*email).clone()}
                                    oninput={input_value(email.clone())}
                                    class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                                    placeholder="Email address"
                                />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-300 mb-1">{"Address"}</label>
                                <textarea
                                    rows="2"
                                    value={(*address).clone()}
                                    oninput={Callback::from({
                                        let address = address.clone();
                                        move |e: InputEvent| {
                                            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                                            address.set(input.value());
                                        }
                                    })}
                                    class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                                    placeholder="Street address..."
                                ></textarea>
                            </div>
                        </div>

                        <div class="px-6 py-4 border-t border-gray-700 flex justify-end space-x-3">
                            <button
                                type="button"
                                onclick={props.on_close.clone()}
                                class="px-4 py-2 text-gray-300 hover:text-white"
                            >
                                {"Cancel"}
                            </button>
                            <button
                                type="submit"
                                class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg"
                            >
                                {"Save Contact"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

// ===== Delete Confirmation Modal =====

#[derive(Properties, PartialEq)]
struct DeleteContactModalProps {
    contact: Contact,
    on_cancel: Callback<MouseEvent>,
    on_confirm: Callback<MouseEvent>,
}

#[function_component(DeleteContactModal)]
fn delete_contact_modal(props: &DeleteContactModalProps) -> Html {
    html! {
        <div class="fixed inset-0 z-50 overflow-y-auto">
            <div class="flex min-h-full items-center justify-center p-4">
                // Backdrop click cancels with no side effects
                <div class="fixed inset-0 bg-black/50" onclick={props.on_cancel.clone()}></div>

                <div class="relative bg-gray-800 rounded-lg shadow-xl border border-gray-700 w-full max-w-md">
                    <div class="px-6 py-4 border-b border-gray-700">
                        <h3 class="text-lg font-medium text-white">{"Delete Contact"}</h3>
                    </div>

                    <div class="p-6">
                        <p class="text-gray-300">
                            {"Are you sure you want to delete "}
                            <span class="font-medium text-white">
                                {format!("{} ({})", props.contact.display_name(), props.contact.phone)}
                            </span>
                            {"?"}
                        </p>
                        <p class="mt-2 text-sm text-gray-500">{"This action cannot be undone."}</p>
                    </div>

                    <div class="px-6 py-4 border-t border-gray-700 flex justify-end space-x-3">
                        <button
                            onclick={props.on_cancel.clone()}
                            class="px-4 py-2 text-gray-300 hover:text-white"
                        >
                            {"Cancel"}
                        </button>
                        <button
                            onclick={props.on_confirm.clone()}
                            class="px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg"
                        >
                            {"Delete"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
