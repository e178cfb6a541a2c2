use contracts::domain::produk::{Produk, StockHealth};

use crate::shared::components::Tone;
use crate::shared::format::{self, Locale};

/// ViewModel for the product detail card.
///
/// Pure over the record and the injected locale; every method returns the
/// display string the view binds verbatim.
pub struct ProdukDetailsViewModel {
    produk: Produk,
    locale: Locale,
}

impl ProdukDetailsViewModel {
    pub fn new(produk: Produk) -> Self {
        Self::with_locale(produk, format::ID)
    }

    pub fn with_locale(produk: Produk, locale: Locale) -> Self {
        Self { produk, locale }
    }

    pub fn name(&self) -> &str {
        &self.produk.name
    }

    pub fn is_priority(&self) -> bool {
        self.produk.is_priority
    }

    pub fn id_label(&self) -> String {
        format!("#{}", self.produk.id)
    }

    pub fn status_badge(&self) -> (&'static str, Tone) {
        if self.produk.is_active {
            ("Aktif", Tone::Success)
        } else {
            ("Tidak Aktif", Tone::Danger)
        }
    }

    /// Badge text when the product is flagged priority; `None` means the
    /// view shows the non-priority placeholder instead. The rank suffix
    /// follows presence of the rank, so rank 0 still renders "#0".
    pub fn priority_badge(&self) -> Option<String> {
        if !self.produk.is_priority {
            return None;
        }
        Some(match self.produk.priority_order {
            Some(rank) => format!("Priority #{rank}"),
            None => "Priority".to_string(),
        })
    }

    pub fn unit_price_text(&self) -> String {
        format::format_currency(self.produk.unit_price, &self.locale)
    }

    pub fn shipped_text(&self) -> String {
        format::format_int(self.produk.total_shipped, &self.locale)
    }

    pub fn sold_text(&self) -> String {
        format::format_int(self.produk.total_sold, &self.locale)
    }

    pub fn returned_text(&self) -> String {
        format::format_int(self.produk.total_returned, &self.locale)
    }

    pub fn stock_text(&self) -> String {
        format::format_int(self.produk.stock_on_hand, &self.locale)
    }

    pub fn revenue_text(&self) -> String {
        format::format_currency(self.produk.total_revenue, &self.locale)
    }

    pub fn health(&self) -> StockHealth {
        self.produk.stock_health()
    }

    pub fn health_message(&self) -> &'static str {
        match self.health() {
            StockHealth::Deficit => "Stok kurang!",
            StockHealth::Empty => "Stok habis",
            StockHealth::Ok => "Stok tersedia",
        }
    }

    pub fn health_tone(&self) -> Tone {
        match self.health() {
            StockHealth::Deficit => Tone::Danger,
            StockHealth::Empty => Tone::Warning,
            StockHealth::Ok => Tone::Success,
        }
    }

    /// Raw-integer restatement of the stock identity. The supplied stock
    /// value is shown as-is; no grouping, no recomputation.
    pub fn formula_text(&self) -> String {
        format!(
            "{} - {} - {} = {}",
            self.produk.total_shipped,
            self.produk.total_sold,
            self.produk.total_returned,
            self.produk.stock_on_hand
        )
    }
}
