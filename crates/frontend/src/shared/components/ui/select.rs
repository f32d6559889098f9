use contracts::dashboards::d400_daily_sales::SelectOption;
use leptos::prelude::*;

/// Native select whose options may be filled after mount.
///
/// Both `on_focus` and `on_click` are exposed: some browsers open the list on
/// click without focusing it first.
#[component]
pub fn Select(
    /// ID for the select element
    #[prop(into)]
    id: String,
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Options, placeholder first
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Change event handler
    on_change: Callback<String>,
    /// Focus handler
    #[prop(optional)]
    on_focus: Option<Callback<()>>,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let label_for = id.clone();
    let notify = move |handler: Option<Callback<()>>| {
        if let Some(handler) = handler {
            handler.run(());
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <select
                id=id
                class=move || format!("form__select {}", additional_class())
                on:focus=move |_| notify(on_focus)
                on:click=move |_| notify(on_click)
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|option| option.value.clone()
                    children=move |option| {
                        let option_value = option.value.clone();
                        let is_selected = move || value.get() == option_value;
                        view! {
                            <option value=option.value selected=is_selected>
                                {option.label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
