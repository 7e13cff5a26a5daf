//! Generic renderer for `FieldSpec` lists
//!
//! The component owns no state: values are read and written through
//! callbacks, so one renderer serves all three dialogs.

use contracts::shared::form::FieldSpec;
use leptos::prelude::*;
use std::rc::Rc;

/// Значение чекбокса в карте значений формы
pub fn checkbox_value(checked: bool) -> String {
    if checked { "1" } else { "0" }.to_string()
}

pub fn is_checked(value: &str) -> bool {
    value == "1"
}

#[component]
pub fn FieldSpecForm(
    fields: Vec<FieldSpec>,
    /// Current value of a field
    value: Callback<&'static str, String>,
    /// Field edited by the user
    on_change: Callback<(&'static str, String)>,
    /// Options for `Select` fields that change at runtime (None = static options)
    #[prop(optional)]
    options: Option<Callback<&'static str, Option<Vec<String>>>>,
    /// Custom content for `Html` slots
    #[prop(optional)]
    html: Option<Rc<dyn Fn(&'static str) -> AnyView>>,
) -> impl IntoView {
    let rendered = fields
        .into_iter()
        .filter(|field| !field.base().is_some_and(|b| b.hidden))
        .map(|field| render_field(field, value, on_change, options, html.clone()))
        .collect_view();

    view! {
        <div class="field-spec-form" style="display: flex; flex-wrap: wrap; gap: 8px 16px;">
            {rendered}
        </div>
    }
}

fn render_field(
    field: FieldSpec,
    value: Callback<&'static str, String>,
    on_change: Callback<(&'static str, String)>,
    options: Option<Callback<&'static str, Option<Vec<String>>>>,
    html: Option<Rc<dyn Fn(&'static str) -> AnyView>>,
) -> AnyView {
    let label_text = |label: &'static str, required: bool| {
        if required {
            format!("{} *", label)
        } else {
            label.to_string()
        }
    };

    match field {
        FieldSpec::TextInput(base) => {
            let name = base.fieldname;
            view! {
                <div class="form-group" style="flex: 1 1 45%;">
                    <label for=name>{label_text(base.label, base.rules.required)}</label>
                    <input
                        type="text"
                        id=name
                        prop:value=move || value.run(name)
                        on:input=move |ev| on_change.run((name, event_target_value(&ev)))
                    />
                    {base.description.map(|d| view! { <small style="color: #666;">{d}</small> })}
                </div>
            }
            .into_any()
        }
        FieldSpec::LinkInput { base, target } => {
            let name = base.fieldname;
            view! {
                <div class="form-group" style="flex: 1 1 45%;">
                    <label for=name>{label_text(base.label, base.rules.required)}</label>
                    <input
                        type="text"
                        id=name
                        placeholder=target
                        prop:value=move || value.run(name)
                        on:change=move |ev| on_change.run((name, event_target_value(&ev)))
                    />
                </div>
            }
            .into_any()
        }
        FieldSpec::Checkbox { base, .. } => {
            let name = base.fieldname;
            view! {
                <div class="form-group" style="flex: 1 1 45%;">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || is_checked(&value.run(name))
                            on:change=move |ev| {
                                on_change.run((name, checkbox_value(event_target_checked(&ev))))
                            }
                        />
                        " "
                        {base.label}
                    </label>
                </div>
            }
            .into_any()
        }
        FieldSpec::Select {
            base,
            options: static_options,
        } => {
            let name = base.fieldname;
            let current_options = move || {
                options
                    .and_then(|cb| cb.run(name))
                    .unwrap_or_else(|| static_options.clone())
            };
            view! {
                <div class="form-group" style="flex: 1 1 45%;">
                    <label for=name>{label_text(base.label, base.rules.required)}</label>
                    <select
                        id=name
                        prop:value=move || value.run(name)
                        on:change=move |ev| on_change.run((name, event_target_value(&ev)))
                    >
                        {move || {
                            let selected = value.run(name);
                            current_options()
                                .into_iter()
                                .map(|opt| {
                                    let is_selected = opt == selected;
                                    view! {
                                        <option value=opt.clone() selected=is_selected>
                                            {opt.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            }
            .into_any()
        }
        FieldSpec::ReadOnlyDisplay(base) => {
            let name = base.fieldname;
            view! {
                <div class="form-group" style="flex: 1 1 45%;">
                    <label>{base.label}</label>
                    <div style="padding: 6px 0; color: #333; min-height: 1.5em;">
                        {move || value.run(name)}
                    </div>
                </div>
            }
            .into_any()
        }
        FieldSpec::SectionBreak { label } => view! {
            <div style="flex-basis: 100%; border-top: 1px solid #ddd; padding-top: 8px;">
                {label.map(|l| view! { <h4 style="margin: 0;">{l}</h4> })}
            </div>
        }
        .into_any(),
        // Колонки не поддерживаются: поля переносятся сами
        FieldSpec::ColumnBreak => ().into_any(),
        FieldSpec::Html { fieldname } => match html {
            Some(render) => view! {
                <div style="flex-basis: 100%;">{render(fieldname)}</div>
            }
            .into_any(),
            None => ().into_any(),
        },
    }
}
