use contracts::usecases::u508_create_fashion_items::CreatedItem;
use leptos::prelude::*;

/// Таблица созданных товаров: код, наименование, штрихкод, количество
#[component]
pub fn CreatedItemsTable(items: Vec<CreatedItem>) -> impl IntoView {
    view! {
        <table class="table" style="width: 100%; border-collapse: collapse; margin-top: 8px;">
            <thead>
                <tr style="background: #f5f5f5;">
                    <th style="text-align: left; padding: 4px;">"Item Code"</th>
                    <th style="text-align: left; padding: 4px;">"Item Name"</th>
                    <th style="text-align: left; padding: 4px;">"Barcode"</th>
                    <th style="text-align: right; padding: 4px;">"Qty"</th>
                </tr>
            </thead>
            <tbody>
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <tr>
                                <td style="padding: 4px;">{item.item_code}</td>
                                <td style="padding: 4px;">{item.item_name}</td>
                                <td style="padding: 4px; font-family: monospace;">
                                    {item.barcode.unwrap_or_default()}
                                </td>
                                <td style="padding: 4px; text-align: right;">{item.qty}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// Ошибки сервера выводятся как есть
#[component]
pub fn ErrorList(errors: Vec<String>) -> impl IntoView {
    (!errors.is_empty()).then(|| {
        view! {
            <ul class="error" style="color: #c0392b; margin: 8px 0;">
                {errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
            </ul>
        }
    })
}
