use contracts::domain::produk::Produk;
use leptos::prelude::*;

use super::view_model::ProdukDetailsViewModel;
use crate::shared::components::badge::Badge;
use crate::shared::components::stat_counter::StatCounter;
use crate::shared::components::Tone;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

/// Read-only product card in a modal. The owner keeps the record and the
/// visibility; this view only reports the close click via `on_close`.
#[component]
pub fn ProdukDetails(produk: Produk, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let vm = ProdukDetailsViewModel::new(produk);

    let surface_class = "produk-details".to_string();
    let id_label = vm.id_label();
    let (status_text, status_tone) = vm.status_badge();
    let name = vm.name().to_string();
    let show_star = vm.is_priority();
    let priority_badge = vm.priority_badge();
    let unit_price = vm.unit_price_text();
    let shipped = vm.shipped_text();
    let sold = vm.sold_text();
    let returned = vm.returned_text();
    let stock = vm.stock_text();
    let stock_tone = vm.health_tone();
    let stock_caption = vm.health_message().to_string();
    let revenue = vm.revenue_text();
    let revenue_caption = "Revenue dari produk ini".to_string();
    let formula = vm.formula_text();

    view! {
        <ModalFrame modal_class=surface_class>
            <div class="details-header">
                <span class="details-header__icon">{icon("products")}</span>
                <h2 class="details-header__title">"Detail Produk"</h2>
            </div>

            <div class="details-body">
                <table class="details-table">
                    <tbody>
                        <tr>
                            <td class="details-table__label">"ID Produk"</td>
                            <td class="details-table__value details-table__value--mono">{id_label}</td>
                            <td class="details-table__label">"Status"</td>
                            <td class="details-table__value">
                                <Badge tone=status_tone>{status_text}</Badge>
                            </td>
                        </tr>
                        <tr>
                            <td class="details-table__label">"Nama Produk"</td>
                            <td class="details-table__value" colspan="3">
                                <span class="details-table__name">
                                    {show_star
                                        .then(|| {
                                            view! {
                                                <span class="details-table__star">{icon("star")}</span>
                                            }
                                        })}
                                    {name}
                                </span>
                            </td>
                        </tr>
                        <tr>
                            <td class="details-table__label">"Harga Satuan"</td>
                            <td class="details-table__value">{unit_price}</td>
                            <td class="details-table__label">"Prioritas"</td>
                            <td class="details-table__value">
                                {match priority_badge {
                                    Some(text) => {
                                        view! {
                                            <Badge tone=Tone::Warning>
                                                <span class="badge__icon">{icon("star")}</span>
                                                {text}
                                            </Badge>
                                        }
                                            .into_any()
                                    }
                                    None => {
                                        view! {
                                            <span class="details-table__placeholder">"Non-Priority"</span>
                                        }
                                            .into_any()
                                    }
                                }}
                            </td>
                        </tr>
                    </tbody>
                </table>

                <h3 class="details-section-title">
                    {icon("warehouse")}
                    "Statistik Produk"
                </h3>
                <div class="stat-grid stat-grid--three">
                    <StatCounter label="Dikirim" icon_name="shipments" value=shipped tone=Tone::Primary />
                    <StatCounter label="Terjual" icon_name="trend-up" value=sold tone=Tone::Success />
                    <StatCounter
                        label="Dikembalikan"
                        icon_name="trend-down"
                        value=returned
                        tone=Tone::Warning
                    />
                </div>
                <div class="stat-grid stat-grid--two">
                    <StatCounter
                        label="Stok di Toko"
                        icon_name="activity"
                        value=stock
                        tone=stock_tone
                        caption=stock_caption
                        large=true
                    />
                    <StatCounter
                        label="Total Dibayar"
                        icon_name="banknote"
                        value=revenue
                        tone=Tone::Neutral
                        caption=revenue_caption
                    />
                </div>

                <div class="info-note">
                    <p class="info-note__heading">
                        <strong>"Perhitungan Stok:"</strong>
                        " Stok = Dikirim - Terjual - Dikembalikan"
                    </p>
                    <p class="info-note__formula">{formula}</p>
                </div>
            </div>

            <div class="details-footer">
                <button class="button button--primary" on:click=move |_| on_close.run(())>
                    "Tutup"
                </button>
            </div>
        </ModalFrame>
    }
}
