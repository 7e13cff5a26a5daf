use crate::domain::a025_size_preset::ui::quick_entry::SizePresetQuickEntry;
use crate::shared::modal::Modal;
use crate::usecases::u508_item_quick_entry::api::fetch_settings;
use crate::usecases::u508_item_quick_entry::ItemQuickEntryDialog;
use crate::usecases::u510_size_grid::SizeGridDialog;
use contracts::shared::quick_entry_settings::QuickEntrySettings;
use contracts::usecases::u508_create_fashion_items::CreatedItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dialog {
    ItemQuickEntry,
    SizePreset,
    SizeGrid,
}

#[component]
pub fn App() -> impl IntoView {
    let (settings, set_settings) = signal(QuickEntrySettings::default());
    let (open, set_open) = signal(Option::<Dialog>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    spawn_local(async move {
        set_settings.set(fetch_settings().await);
    });

    let close = Callback::new(move |_| set_open.set(None));
    let on_preset_saved = Callback::new(move |name: String| {
        set_notice.set(Some(format!("Size preset \"{}\" saved", name)));
        set_open.set(None);
    });
    // Первый созданный товар открывается в форме, остальные идут строками
    let on_item_created = Callback::new(move |items: Vec<CreatedItem>| {
        let Some(first) = items.first() else {
            return;
        };
        let rows: Vec<String> = items
            .iter()
            .skip(1)
            .map(|i| format!("{} x{}", i.item_code, i.qty))
            .collect();
        let mut text = format!("Created {} item(s): {} x{}", items.len(), first.item_code, first.qty);
        if !rows.is_empty() {
            text.push_str(&format!("; rows: {}", rows.join(", ")));
        }
        set_notice.set(Some(text));
        set_open.set(None);
    });

    let open_dialog = move |dialog: Dialog| {
        move |_: leptos::ev::MouseEvent| {
            set_notice.set(None);
            set_open.set(Some(dialog));
        }
    };

    view! {
        <div class="app" style="padding: 20px; max-width: 960px; margin: 0 auto;">
            <h2>"Fashion items"</h2>
            <div style="display: flex; gap: 8px; margin-bottom: 12px;">
                <button class="btn btn-primary" on:click=open_dialog(Dialog::ItemQuickEntry)>
                    "Quick Entry: Item"
                </button>
                <button class="btn btn-secondary" on:click=open_dialog(Dialog::SizePreset)>
                    "New Size Preset"
                </button>
                <button class="btn btn-secondary" on:click=open_dialog(Dialog::SizeGrid)>
                    "Create Size Grid"
                </button>
            </div>

            {move || notice.get().map(|n| view! { <div class="notice" style="color: #1e8449;">{n}</div> })}

            {move || match open.get() {
                Some(Dialog::ItemQuickEntry) => view! {
                    <Modal title="Quick Entry: Item".to_string() on_close=close>
                        <ItemQuickEntryDialog settings=settings.get_untracked() on_created=on_item_created />
                    </Modal>
                }
                .into_any(),
                Some(Dialog::SizePreset) => view! {
                    <Modal title="New Size Preset".to_string() on_close=close>
                        <SizePresetQuickEntry on_saved=on_preset_saved />
                    </Modal>
                }
                .into_any(),
                Some(Dialog::SizeGrid) => view! {
                    <Modal title="Create Size Grid".to_string() on_close=close>
                        <SizeGridDialog />
                    </Modal>
                }
                .into_any(),
                None => ().into_any(),
            }}
        </div>
    }
}
