// src/models/orders.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::common::validation::{validate_not_blank, DraftForm};

// --- Enums ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PaymentMethod {
    Cash,
    Card,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

// --- Pedido armazenado ---
// Os itens de linha não são guardados: só o resumo (contagem e total).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[schema(example = "ORD-001")]
    pub id: String,
    #[schema(example = "Rajesh Kumar")]
    pub customer_name: String,
    #[schema(example = 5)]
    pub item_count: u32,
    #[schema(value_type = f64, example = 850.0)]
    pub total: Decimal,
    pub status: OrderStatus,
    pub date: NaiveDate,
    pub payment_method: PaymentMethod,
}

// Cards do topo da tela de pedidos
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[schema(value_type = f64)]
    pub total_revenue: Decimal, // Só pedidos concluídos
    pub total_orders: usize,
    pub completed: usize,
    pub pending: usize,
}

// ---
// Rascunho do formulário de pedido
// ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

impl Default for LineItemDraft {
    // Linha vazia que o formulário abre (quantidade 1)
    fn default() -> Self {
        Self { name: String::new(), quantity: 1, price: Decimal::ZERO }
    }
}

impl LineItemDraft {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.quantity > 0 && self.price > Decimal::ZERO
    }

    /// `None` se quantidade x preço estoura o `Decimal`.
    pub fn subtotal(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.price)
    }
}

// Soma dos subtotais; `None` em caso de estouro.
fn checked_total(items: &[LineItemDraft]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.subtotal()?))
}

fn validate_line_items(items: &[LineItemDraft]) -> Result<(), ValidationError> {
    if items.is_empty() {
        let mut err = ValidationError::new("empty");
        err.message = Some("Adicione pelo menos um item ao pedido.".into());
        return Err(err);
    }
    if !items.iter().all(LineItemDraft::is_complete) {
        let mut err = ValidationError::new("incomplete");
        err.message = Some("Preencha todos os itens com valores válidos.".into());
        return Err(err);
    }
    if checked_total(items).is_none() {
        let mut err = ValidationError::new("overflow");
        err.message = Some("O total do pedido excede o limite.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[validate(custom(function = "validate_not_blank", message = "Informe o nome do cliente."))]
    #[serde(default)]
    pub customer_name: String,

    #[validate(custom(function = "validate_line_items"))]
    #[serde(default)]
    pub items: Vec<LineItemDraft>,

    #[validate(required(message = "Selecione a forma de pagamento."))]
    pub payment_method: Option<PaymentMethod>,

    #[serde(default)]
    pub notes: String,

    // Só na edição; na criação o pedido nasce "pending"
    pub status: Option<OrderStatus>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            items: vec![LineItemDraft::default()],
            payment_method: None,
            notes: String::new(),
            status: None,
        }
    }
}

impl DraftForm for OrderDraft {
    const FIELD_ORDER: &'static [&'static str] = &["customer_name", "items", "payment_method"];
}

impl OrderDraft {
    /// Contagem de itens = número de linhas; total = soma de quantidade x preço.
    /// `None` se o total estoura (o `check` já recusa esse rascunho).
    pub fn totals(&self) -> Option<(u32, Decimal)> {
        let count = u32::try_from(self.items.len()).ok()?;
        Some((count, checked_total(&self.items)?))
    }
}

// Resposta do "?create=true" / "?edit=<id>" da tela de pedidos.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormIntent {
    pub open: bool,
    pub editing_id: Option<String>,
    pub draft: Option<OrderDraft>,
    // O pedido só guarda o resumo; a edição precisa reenviar os itens.
    pub line_items_available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::AppError;

    fn line(name: &str, quantity: i64, price: i64) -> LineItemDraft {
        LineItemDraft { name: name.into(), quantity, price: Decimal::from(price) }
    }

    fn valid_draft() -> OrderDraft {
        OrderDraft {
            customer_name: "Priya Sharma".into(),
            items: vec![line("Rice", 2, 50), line("Flour", 1, 100)],
            payment_method: Some(PaymentMethod::Upi),
            ..OrderDraft::default()
        }
    }

    fn first_message(draft: &OrderDraft) -> String {
        match draft.check() {
            Err(AppError::ValidationError { message, .. }) => message,
            other => panic!("esperava erro de validação, veio {:?}", other),
        }
    }

    #[test]
    fn totals_sum_line_items() {
        let (count, total) = valid_draft().totals().unwrap();
        assert_eq!(count, 2);
        assert_eq!(total, Decimal::from(200));
    }

    #[test]
    fn oversized_line_item_is_rejected_instead_of_overflowing() {
        let huge = LineItemDraft {
            name: "Gold".into(),
            quantity: 1_000_000,
            price: Decimal::from_i128_with_scale(100_000_000_000_000_000_000_000_000, 0),
        };
        let draft = OrderDraft { items: vec![huge], ..valid_draft() };
        assert_eq!(draft.totals(), None);
        assert_eq!(first_message(&draft), "O total do pedido excede o limite.");
    }

    #[test]
    fn sum_overflow_across_lines_is_rejected() {
        let near_max = LineItemDraft { name: "Big".into(), quantity: 1, price: Decimal::MAX };
        let draft = OrderDraft { items: vec![near_max.clone(), near_max], ..valid_draft() };
        assert_eq!(first_message(&draft), "O total do pedido excede o limite.");
    }

    #[test]
    fn blank_form_blocks_on_customer_name_first() {
        assert_eq!(first_message(&OrderDraft::default()), "Informe o nome do cliente.");
    }

    #[test]
    fn incomplete_line_items_are_rejected() {
        for bad in [line("", 1, 10), line("Rice", 0, 10), line("Rice", 1, 0), line("Rice", -2, 10)] {
            let draft = OrderDraft { items: vec![line("Ok", 1, 1), bad], ..valid_draft() };
            assert_eq!(first_message(&draft), "Preencha todos os itens com valores válidos.");
        }
    }

    #[test]
    fn empty_line_items_are_rejected() {
        let draft = OrderDraft { items: vec![], ..valid_draft() };
        assert_eq!(first_message(&draft), "Adicione pelo menos um item ao pedido.");
    }

    #[test]
    fn payment_method_is_required() {
        let draft = OrderDraft { payment_method: None, ..valid_draft() };
        assert_eq!(first_message(&draft), "Selecione a forma de pagamento.");
    }

    #[test]
    fn payment_method_wire_names() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"Bank Transfer\"");
        let parsed: PaymentMethod = serde_json::from_str("\"UPI\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Upi);
    }
}
