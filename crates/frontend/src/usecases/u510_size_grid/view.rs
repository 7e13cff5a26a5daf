use super::api;
use super::state::SizeGridState;
use crate::shared::form::FieldSpecForm;
use crate::shared::results::{CreatedItemsTable, ErrorList};
use crate::usecases::u508_item_quick_entry::{FashionItemsGateway, HttpGateway};
use contracts::domain::a026_fashion_item::FashionItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Создание вариантов шаблона: цвет, пресет и размеры через запятую
#[component]
pub fn SizeGridDialog() -> impl IntoView {
    let state = RwSignal::new(SizeGridState::new());
    let (templates, set_templates) = signal(Vec::<FashionItem>::new());

    spawn_local(async move {
        match api::list_templates().await {
            Ok(items) => set_templates.set(items),
            Err(e) => state.update(|s| s.error = Some(format!("Failed to load templates: {}", e))),
        }
    });

    let load_presets = move || {
        let Some((ticket, brand)) =
            state.try_update(|s| (s.begin_preset_load(), s.brand().to_string()))
        else {
            return;
        };
        spawn_local(async move {
            let result = HttpGateway.fetch_presets(&brand).await;
            state.update(|s| {
                s.finish_preset_load(ticket, result);
            });
        });
    };
    load_presets();

    let on_template = move |ev| {
        let code = event_target_value(&ev);
        let brand = templates.with(|items| {
            items
                .iter()
                .find(|i| i.item_code() == code)
                .and_then(|i| i.brand.clone())
        });
        let brand_changed = state
            .try_update(|s| s.set_template(&code, brand.as_deref()))
            .unwrap_or(false);
        if brand_changed {
            load_presets();
        }
    };

    // список пресетов меняется после загрузки, форма строится заново
    let fields = Memo::new(move |_| state.with(|s| s.fields()));
    let value = Callback::new(move |name: &'static str| state.with(|s| s.value(name)));
    let on_change = Callback::new(move |(name, value): (&'static str, String)| {
        state.update(|s| s.set_value(name, value));
    });

    let submit = move |_| {
        let request = match state.with(|s| s.prepare()) {
            Ok(request) => request,
            Err(e) => {
                state.update(|s| s.error = Some(e));
                return;
            }
        };
        state.update(|s| {
            s.submitting = true;
            s.error = None;
        });
        spawn_local(async move {
            let result = api::create_variants(&request).await;
            state.update(|s| s.finish_submission(result));
        });
    };

    view! {
        <div class="size-grid" style="min-width: 520px;">
            <div class="form-group">
                <label for="template_item">"Template Item *"</label>
                <select
                    id="template_item"
                    prop:value=move || state.with(|s| s.template_item().to_string())
                    on:change=on_template
                >
                    <option value="">""</option>
                    {move || templates.with(|items| {
                        items
                            .iter()
                            .map(|item| {
                                let code = item.item_code().to_string();
                                view! { <option value=code.clone()>{format!("{} - {}", code, item.item_name())}</option> }
                            })
                            .collect_view()
                    })}
                </select>
            </div>

            {move || state.with(|s| s.warning.clone()).map(|w| view! {
                <div class="warning" style="color: #b9770e; margin: 8px 0;">{w}</div>
            })}

            {move || view! { <FieldSpecForm fields=fields.get() value=value on_change=on_change /> }}

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="error" style="color: #c0392b; margin-top: 8px;">{e}</div>
            })}

            <div class="details-actions" style="margin-top: 12px;">
                <button
                    class="btn btn-primary"
                    on:click=submit
                    disabled=move || state.with(|s| s.submitting)
                >
                    "Create Variants"
                </button>
            </div>

            {move || state.with(|s| s.response.clone()).map(|response| view! {
                <div class="results" style="margin-top: 12px;">
                    <h4 style="margin: 0;">{response.message}</h4>
                    <CreatedItemsTable items=response.items />
                    <ErrorList errors=response.errors />
                </div>
            })}
        </div>
    }
}
