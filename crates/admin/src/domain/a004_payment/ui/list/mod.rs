//! Список платежей. Только просмотр: массовых действий нет.

use contracts::domain::a004_payment::{Payment, PaymentField};

use crate::shared::cell_format::{BadgeTone, CellFormatter};
use crate::shared::config::AdminConfig;
use crate::shared::list::{Choice, Column, ListFilter, ListView, SortState};

pub const STATUS_TONES: &[(&str, BadgeTone)] = &[
    ("succeeded", BadgeTone::Success),
    ("pending", BadgeTone::Warning),
    ("failed", BadgeTone::Error),
    ("refunded", BadgeTone::Neutral),
];

/// Способы оплаты для фильтра "Method"
pub const METHOD_OPTIONS: &[&str] = &["all", "card", "paypal", "bank_transfer", "cash"];

pub fn columns() -> Vec<Column<PaymentField>> {
    vec![
        Column::new(PaymentField::Id, "Payment ID").sortable().width("w-32"),
        Column::new(PaymentField::Amount, "Amount").sortable(),
        Column::new(PaymentField::Status, "Status")
            .sortable()
            .formatter(CellFormatter::Badge { tones: STATUS_TONES }),
        Column::new(PaymentField::CustomerName, "Customer")
            .sortable()
            .formatter(CellFormatter::Composite(vec![PaymentField::CustomerEmail])),
        Column::new(PaymentField::ActivityName, "Activity").sortable(),
        Column::new(PaymentField::PaymentMethod, "Method").sortable(),
        Column::new(PaymentField::CreatedAt, "Date").sortable(),
    ]
}

pub fn searchable_fields() -> Vec<PaymentField> {
    vec![
        PaymentField::CustomerName,
        PaymentField::CustomerEmail,
        PaymentField::ActivityName,
        PaymentField::Id,
    ]
}

pub fn new_list(config: &AdminConfig) -> ListView<Payment> {
    let filter = ListFilter::new(searchable_fields()).with_min_search_len(config.list.min_search_len);
    ListView::new(columns(), filter).with_sort(SortState::Descending(PaymentField::CreatedAt))
}

pub fn set_status_filter(view: &mut ListView<Payment>, value: &str) {
    view.filter_mut()
        .set_choice(PaymentField::Status, Choice::from_select(value));
}

pub fn set_method_filter(view: &mut ListView<Payment>, value: &str) {
    view.filter_mut()
        .set_choice(PaymentField::PaymentMethod, Choice::from_select(value));
}
