//! Виджет бронирования на странице активности: количество участников,
//! выбор даты и слота, итоговая цена и ссылка на оформление.

use contracts::domain::a001_activity::{Activity, AvailableDate, AvailableTimeSlot, PriceType, SlotStatus};
use contracts::shared::api_response::ApiResponse;
use serde::{Deserialize, Serialize};

use crate::shared::config::BookingConfig;
use crate::shared::error::AdminError;

/// Сколько дней показывать в сетке выбора даты
pub const VISIBLE_DAYS: usize = 6;

/// Параметры страницы оформления `/book/{id}/select`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingQuery {
    pub adults: u32,
    pub children: u32,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone)]
pub struct BookingWidget {
    activity_id: String,
    max_participants: u32,
    adult_price: f64,
    child_price: f64,
    adults: u32,
    children: u32,
    dates: Vec<AvailableDate>,
    selected_date: Option<String>,
    selected_time: Option<String>,
    loading: bool,
}

impl BookingWidget {
    /// Цена ребёнка берётся из прайса, иначе доля от взрослой цены
    pub fn new(activity: &Activity, config: &BookingConfig) -> Self {
        let adult_price = activity.price_for(PriceType::Adult).unwrap_or(0.0);
        let child_price = activity
            .price_for(PriceType::Child)
            .unwrap_or(adult_price * config.child_price_ratio);
        let max = activity.max_participants.max(1);
        let adults = config.default_adults.clamp(1, max);
        let children = config.default_children.min(max - adults);

        Self {
            activity_id: activity.id.clone(),
            max_participants: activity.max_participants,
            adult_price,
            child_price,
            adults,
            children,
            dates: Vec::new(),
            selected_date: None,
            selected_time: None,
            loading: true,
        }
    }

    pub fn adult_price(&self) -> f64 {
        self.adult_price
    }

    pub fn child_price(&self) -> f64 {
        self.child_price
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn total_participants(&self) -> u32 {
        self.adults + self.children
    }

    pub fn total_price(&self) -> f64 {
        self.adult_price * f64::from(self.adults) + self.child_price * f64::from(self.children)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_add_participant(&self) -> bool {
        self.total_participants() < self.max_participants
    }

    pub fn add_adult(&mut self) {
        self.adults = (self.adults + 1).min(self.max_participants.saturating_sub(self.children).max(1));
    }

    pub fn remove_adult(&mut self) {
        self.adults = self.adults.saturating_sub(1).max(1);
    }

    pub fn add_child(&mut self) {
        self.children = (self.children + 1).min(self.max_participants.saturating_sub(self.adults));
    }

    pub fn remove_child(&mut self) {
        self.children = self.children.saturating_sub(1);
    }

    /// Ответ на запрос доступности. Первая доступная дата выбирается
    /// автоматически, если дата ещё не выбрана.
    pub fn apply_availability(
        &mut self,
        response: ApiResponse<Vec<AvailableDate>>,
    ) -> Result<(), AdminError> {
        self.loading = false;
        let dates = response.into_result().map_err(|message| {
            tracing::warn!("Availability for {} failed: {}", self.activity_id, message);
            AdminError::FetchFailure(message)
        })?;

        if self.selected_date.is_none() {
            self.selected_date = dates.iter().find(|d| d.available).map(|d| d.date.clone());
        }
        self.dates = dates;
        Ok(())
    }

    pub fn visible_dates(&self) -> &[AvailableDate] {
        &self.dates[..self.dates.len().min(VISIBLE_DAYS)]
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.selected_time.as_deref()
    }

    /// Недоступные и неизвестные даты игнорируются
    pub fn select_date(&mut self, date: &str) {
        let available = self.dates.iter().any(|d| d.date == date && d.available);
        if !available {
            return;
        }
        if self.selected_date.as_deref() != Some(date) {
            self.selected_time = None;
        }
        self.selected_date = Some(date.to_string());
    }

    pub fn time_slots(&self) -> &[AvailableTimeSlot] {
        self.selected_date
            .as_deref()
            .and_then(|date| self.dates.iter().find(|d| d.date == date))
            .map(|d| d.time_slots.as_slice())
            .unwrap_or(&[])
    }

    /// Слот можно выбрать, если он не заполнен, не отменён
    /// и в нём хватает мест на всех участников
    pub fn slot_selectable(&self, slot: &AvailableTimeSlot) -> bool {
        !matches!(slot.status, SlotStatus::Full | SlotStatus::Cancelled)
            && slot.available_spots >= self.total_participants()
    }

    /// Возвращает `false`, если слот не найден или недоступен
    pub fn select_time(&mut self, time: &str) -> bool {
        let selectable = self
            .time_slots()
            .iter()
            .any(|slot| slot.time == time && self.slot_selectable(slot));
        if selectable {
            self.selected_time = Some(time.to_string());
        }
        selectable
    }

    pub fn can_book(&self) -> bool {
        let total = self.total_participants();
        self.selected_date.is_some()
            && self.selected_time.is_some()
            && total > 0
            && total <= self.max_participants
    }

    /// Ссылка на оформление бронирования
    pub fn booking_url(&self) -> Result<String, AdminError> {
        let (Some(date), Some(time)) = (&self.selected_date, &self.selected_time) else {
            return Err(AdminError::validation("Select a date and time first"));
        };
        if !self.can_book() {
            return Err(AdminError::validation("Too many participants for this activity"));
        }
        let query = BookingQuery {
            adults: self.adults,
            children: self.children,
            date: date.clone(),
            time: time.clone(),
        };
        let query = serde_qs::to_string(&query).map_err(|e| AdminError::Output(e.to_string()))?;
        Ok(format!(
            "/book/{}/select?{}",
            urlencoding::encode(&self.activity_id),
            query
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_activity::{ActivityPricing, ActivityStatus};

    fn activity(pricing: Vec<ActivityPricing>, max: u32) -> Activity {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Activity {
            id: "ACT001".into(),
            title: "Catamaran".into(),
            description: String::new(),
            category: None,
            price: 0.0,
            location: "Palma".into(),
            status: ActivityStatus::Active,
            max_participants: max,
            display_order: 0,
            pricing,
            created_at: date,
            updated_at: date,
        }
    }

    fn adult_price(price: f64) -> ActivityPricing {
        ActivityPricing {
            price_type: PriceType::Adult,
            base_price: price,
        }
    }

    fn slot(time: &str, spots: u32, status: SlotStatus) -> AvailableTimeSlot {
        AvailableTimeSlot {
            time: time.into(),
            available_spots: spots,
            max_capacity: 10,
            status,
            is_popular: false,
        }
    }

    fn day(date: &str, available: bool, time_slots: Vec<AvailableTimeSlot>) -> AvailableDate {
        AvailableDate {
            date: date.into(),
            display: date.into(),
            available,
            time_slots,
            popular: false,
        }
    }

    fn availability() -> ApiResponse<Vec<AvailableDate>> {
        ApiResponse::success(
            vec![
                day("2024-06-01", false, vec![]),
                day(
                    "2024-06-02",
                    true,
                    vec![
                        slot("10:00", 8, SlotStatus::Available),
                        slot("12:00", 2, SlotStatus::Limited),
                        slot("16:00", 9, SlotStatus::Cancelled),
                    ],
                ),
                day("2024-06-03", true, vec![slot("10:00", 5, SlotStatus::Available)]),
            ],
            "",
        )
    }

    #[test]
    fn test_prices_and_totals() {
        let config = BookingConfig::default();
        let mut widget = BookingWidget::new(&activity(vec![adult_price(50.0)], 10), &config);
        assert_eq!(widget.child_price(), 40.0);
        widget.add_child();
        assert_eq!(widget.total_participants(), 3);
        assert_eq!(widget.total_price(), 140.0);

        let widget = BookingWidget::new(&activity(vec![], 10), &config);
        assert_eq!(widget.total_price(), 0.0);
    }

    #[test]
    fn test_participant_bounds() {
        let mut widget = BookingWidget::new(&activity(vec![adult_price(50.0)], 3), &BookingConfig::default());
        widget.remove_adult();
        widget.remove_adult();
        assert_eq!(widget.adults(), 1);
        widget.remove_child();
        assert_eq!(widget.children(), 0);

        widget.add_child();
        widget.add_child();
        widget.add_child();
        assert_eq!(widget.children(), 2);
        widget.add_adult();
        assert_eq!(widget.total_participants(), 3);
        assert!(!widget.can_add_participant());
    }

    #[test]
    fn test_first_available_date_is_selected() {
        let mut widget = BookingWidget::new(&activity(vec![adult_price(50.0)], 10), &BookingConfig::default());
        assert!(widget.is_loading());
        widget.apply_availability(availability()).unwrap();
        assert!(!widget.is_loading());
        assert_eq!(widget.selected_date(), Some("2024-06-02"));

        widget.select_date("2024-06-01");
        assert_eq!(widget.selected_date(), Some("2024-06-02"));
    }

    #[test]
    fn test_slot_rules() {
        let mut widget = BookingWidget::new(&activity(vec![adult_price(50.0)], 10), &BookingConfig::default());
        widget.apply_availability(availability()).unwrap();
        widget.add_adult();

        assert!(!widget.select_time("12:00"));
        assert!(!widget.select_time("16:00"));
        assert!(!widget.select_time("09:00"));
        assert!(widget.select_time("10:00"));
        assert!(widget.can_book());

        widget.select_date("2024-06-03");
        assert_eq!(widget.selected_time(), None);
        assert!(!widget.can_book());
    }

    #[test]
    fn test_booking_url() {
        let mut widget = BookingWidget::new(&activity(vec![adult_price(50.0)], 10), &BookingConfig::default());
        assert!(matches!(widget.booking_url(), Err(AdminError::ValidationFailure(_))));

        widget.apply_availability(availability()).unwrap();
        widget.add_child();
        widget.select_time("10:00");

        let url = widget.booking_url().unwrap();
        let (path, query) = url.split_once('?').unwrap();
        assert_eq!(path, "/book/ACT001/select");
        let parsed: BookingQuery = serde_qs::from_str(query).unwrap();
        assert_eq!(
            parsed,
            BookingQuery {
                adults: 2,
                children: 1,
                date: "2024-06-02".into(),
                time: "10:00".into(),
            }
        );
    }

    #[test]
    fn test_failed_availability() {
        let mut widget = BookingWidget::new(&activity(vec![], 10), &BookingConfig::default());
        let err = widget
            .apply_availability(ApiResponse::failure("Activity not found"))
            .unwrap_err();
        assert_eq!(err, AdminError::FetchFailure("Activity not found".into()));
        assert!(!widget.is_loading());
        assert!(widget.visible_dates().is_empty());
    }
}
