use contracts::domain::produk::Produk;
use leptos::prelude::*;

use crate::domain::produk::ui::details::ProdukDetails;

/// Built-in demo catalog in the wire shape of the produk feed. One record
/// carries no priority rank, one is inactive with depleted stock.
const SAMPLE_CATALOG: &str = r#"[
    {
        "id": 12,
        "name": "Gula Pasir 1kg",
        "unitPrice": 15000,
        "isActive": true,
        "isPriority": true,
        "priorityOrder": 1,
        "totalShipped": 100,
        "totalSold": 80,
        "totalReturned": 5,
        "stockOnHand": 15,
        "totalRevenue": 1200000
    },
    {
        "id": 27,
        "name": "Kopi Bubuk 250g",
        "unitPrice": 23500,
        "isActive": true,
        "isPriority": true,
        "totalShipped": 1250,
        "totalSold": 1258,
        "totalReturned": 4,
        "stockOnHand": -12,
        "totalRevenue": 29563000
    },
    {
        "id": 31,
        "name": "Teh Celup Isi 25",
        "unitPrice": 8000,
        "isActive": false,
        "isPriority": false,
        "totalShipped": 40,
        "totalSold": 38,
        "totalReturned": 2,
        "stockOnHand": 0,
        "totalRevenue": 304000
    }
]"#;

fn sample_catalog() -> Vec<Produk> {
    serde_json::from_str(SAMPLE_CATALOG).expect("sample catalog JSON is valid")
}

#[component]
pub fn App() -> impl IntoView {
    let catalog = sample_catalog();
    let (detail, set_detail) = signal::<Option<Produk>>(None);

    // The page owns modal visibility: the detail view reports the close
    // click and is removed here.
    let on_close = Callback::new(move |_| set_detail.set(None));

    view! {
        <main class="page">
            <h1 class="page__title">"Katalog Produk"</h1>
            <div class="page__list">
                {catalog
                    .into_iter()
                    .map(|p| {
                        let open = p.clone();
                        view! {
                            <button
                                class="button button--row"
                                on:click=move |_| set_detail.set(Some(open.clone()))
                            >
                                {p.name.clone()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                detail.get().map(|p| view! { <ProdukDetails produk=p on_close=on_close /> })
            }}
        </main>
    }
}
