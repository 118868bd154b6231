// src/services/status.rs

use chrono::NaiveDate;

use crate::models::inventory::InventoryStatus;

/// Limites da regra de status. Os padrões são 10 unidades e 30 dias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRules {
    pub low_stock_threshold: u32,
    pub expiry_window_days: i64,
}

impl Default for StatusRules {
    fn default() -> Self {
        Self { low_stock_threshold: 10, expiry_window_days: 30 }
    }
}

impl StatusRules {
    /// Status de exibição, calculado na leitura.
    ///
    /// 1. quantidade 0 -> sem estoque
    /// 2. quantidade <= limite -> estoque baixo
    /// 3. senão -> em estoque
    /// 4. validade a até `expiry_window_days` dias de `today` (inclusive, e
    ///    também vencidos) sobrescreve com "vencendo".
    pub fn derive_status(
        &self,
        quantity: u32,
        expiry_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> InventoryStatus {
        if self.is_expiring(expiry_date, today) {
            return InventoryStatus::ExpiringSoon;
        }

        if quantity == 0 {
            InventoryStatus::OutOfStock
        } else if quantity <= self.low_stock_threshold {
            InventoryStatus::LowStock
        } else {
            InventoryStatus::InStock
        }
    }

    pub fn is_expiring(&self, expiry_date: Option<NaiveDate>, today: NaiveDate) -> bool {
        expiry_date
            .map(|expiry| (expiry - today).num_days() <= self.expiry_window_days)
            .unwrap_or(false)
    }

    /// Ícone de alerta da tabela: há estoque, mas pouco.
    pub fn low_stock_warning(&self, quantity: u32) -> bool {
        quantity > 0 && quantity <= self.low_stock_threshold
    }
}
