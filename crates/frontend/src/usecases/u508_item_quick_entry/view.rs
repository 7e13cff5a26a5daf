use super::api::{FashionItemsGateway, HttpGateway};
use super::state::{submit_request, QuickEntryState};
use crate::shared::form::FieldSpecForm;
use crate::shared::results::{CreatedItemsTable, ErrorList};
use contracts::shared::form::{fields, item_quick_entry_fields, select_options};
use contracts::shared::quick_entry_settings::QuickEntrySettings;
use contracts::usecases::u508_create_fashion_items::{CreatedItem, SubmissionOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// Диалог быстрого ввода товара по размерам.
///
/// `on_created` получает созданные товары, если создан хотя бы один.
#[component]
pub fn ItemQuickEntryDialog(
    settings: QuickEntrySettings,
    on_created: Callback<Vec<CreatedItem>>,
) -> impl IntoView {
    let state = RwSignal::new(QuickEntryState::new(&settings));
    let gateway = HttpGateway;

    // Каталог для текущего бренда; старые ответы отбрасываются состоянием
    let load_presets = move || {
        let Some((ticket, brand)) = state.try_update(|s| (s.begin_preset_load(), s.brand())) else {
            return;
        };
        spawn_local(async move {
            let result = gateway.fetch_presets(&brand).await;
            state.update(|s| {
                s.finish_preset_load(ticket, result);
            });
        });
    };
    load_presets();

    let value = Callback::new(move |name: &'static str| state.with(|s| s.value(name)));
    let on_change = Callback::new(move |(name, value): (&'static str, String)| {
        let brand_changed = state.try_update(|s| s.set_value(name, value)).unwrap_or(false);
        if brand_changed {
            load_presets();
        }
    });
    let options = Callback::new(move |name: &'static str| {
        (name == fields::SIZE_PRESET).then(|| state.with(|s| select_options(s.catalog().names())))
    });
    let html: Rc<dyn Fn(&'static str) -> AnyView> = Rc::new(move |name| {
        if name == fields::SIZES_GRID {
            view! { <SizeQuantityGrid state=state /> }.into_any()
        } else {
            ().into_any()
        }
    });

    let submit = move |_| {
        let prepared = state.with(|s| s.prepare_submission());
        match prepared {
            Err(e) => state.update(|s| s.error = Some(e.to_string())),
            Ok(request) => {
                state.update(|s| {
                    s.submitting = true;
                    s.error = None;
                });
                spawn_local(async move {
                    let result = submit_request(&gateway, request).await;
                    let created = state.try_update(|s| s.finish_submission(result)).flatten();
                    if let Some(items) = created {
                        on_created.run(items);
                    }
                });
            }
        }
    };

    view! {
        <div class="item-quick-entry" style="min-width: 640px;">
            {move || state.with(|s| s.warning.clone()).map(|w| view! {
                <div class="warning" style="color: #b9770e; margin-bottom: 8px;">{w}</div>
            })}

            <FieldSpecForm
                fields=item_quick_entry_fields()
                value=value
                on_change=on_change
                options=options
                html=html
            />

            <Preview state=state />

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="error" style="color: #c0392b; margin-top: 8px;">{e}</div>
            })}

            <div class="details-actions" style="margin-top: 12px;">
                <button
                    class="btn btn-primary"
                    on:click=submit
                    disabled=move || state.with(|s| s.submitting)
                >
                    {move || if state.with(|s| s.submitting) { "Creating..." } else { "Create Items" }}
                </button>
            </div>

            {move || state.with(|s| s.outcome.clone()).map(render_outcome)}
        </div>
    }
}

/// Таблица размеров с количеством
#[component]
fn SizeQuantityGrid(state: RwSignal<QuickEntryState>) -> impl IntoView {
    view! {
        <div class="sizes-grid">
            <div class="form-group">
                <label for="custom_sizes_input">"Custom Sizes (comma separated)"</label>
                <input
                    type="text"
                    id="custom_sizes_input"
                    placeholder="S, M, L, XL"
                    prop:value=move || state.with(|s| s.value(fields::CUSTOM_SIZES))
                    on:change=move |ev| state.update(|s| s.set_sizes_text(&event_target_value(&ev)))
                />
            </div>

            <div style="display: flex; gap: 8px; margin: 8px 0;">
                <button class="btn btn-secondary" on:click=move |_| state.update(|s| s.select_all())>
                    "Set all to 1"
                </button>
                <button class="btn btn-secondary" on:click=move |_| state.update(|s| s.clear_all())>
                    "Clear"
                </button>
            </div>

            {move || {
                state.with(|s| {
                    if s.model().sizes().is_empty() {
                        return view! {
                            <p style="color: #666;">"Select a size preset or enter sizes"</p>
                        }
                        .into_any();
                    }
                    let rows = s
                        .model()
                        .sizes()
                        .iter()
                        .map(|size| {
                            let size = size.to_string();
                            let label = size.clone();
                            let qty = s.model().quantity(&size);
                            view! {
                                <tr>
                                    <td style="padding: 4px;">{label}</td>
                                    <td style="padding: 4px;">
                                        <input
                                            type="number"
                                            min="0"
                                            style="width: 80px;"
                                            prop:value=qty.to_string()
                                            on:change=move |ev| {
                                                let raw = event_target_value(&ev);
                                                state.update(|s| {
                                                    s.set_quantity_text(&size, &raw);
                                                });
                                            }
                                        />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view();
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th style="text-align: left; padding: 4px;">"Size"</th>
                                    <th style="text-align: left; padding: 4px;">"Qty"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    }
                    .into_any()
                })
            }}
        </div>
    }
}

#[component]
fn Preview(state: RwSignal<QuickEntryState>) -> impl IntoView {
    move || {
        let (names, remaining) = state.with(|s| s.preview());
        (!names.is_empty()).then(|| {
            view! {
                <div class="preview" style="margin-top: 8px; color: #555;">
                    <strong>"Will be created:"</strong>
                    <ul style="margin: 4px 0;">
                        {names.into_iter().map(|n| view! { <li>{n}</li> }).collect_view()}
                    </ul>
                    {(remaining > 0).then(|| view! { <div>{format!("... and {} more", remaining)}</div> })}
                </div>
            }
        })
    }
}

fn render_outcome(outcome: SubmissionOutcome) -> AnyView {
    match outcome {
        SubmissionOutcome::Created {
            items,
            errors,
            missing,
        } => view! {
            <div class="results" style="margin-top: 12px;">
                <h4 style="margin: 0;">{format!("Created {} item(s)", items.len())}</h4>
                <CreatedItemsTable items=items />
                {(missing > 0).then(|| view! {
                    <div class="warning" style="color: #b9770e;">
                        {format!("{} size(s) were not created", missing)}
                    </div>
                })}
                <ErrorList errors=errors />
            </div>
        }
        .into_any(),
        SubmissionOutcome::NothingCreated { errors } => view! {
            <div class="results" style="margin-top: 12px;">
                <h4 style="margin: 0; color: #c0392b;">"No items were created"</h4>
                <ErrorList errors=errors />
            </div>
        }
        .into_any(),
    }
}
