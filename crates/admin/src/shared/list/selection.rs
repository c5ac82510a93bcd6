use std::collections::BTreeSet;

/// Состояние чекбокса "выбрать все" в заголовке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Выбранные строки списка.
///
/// Выбор "липкий": id остаются выбранными, даже если фильтр скрыл строку.
/// Сбрасывается только явно (`clear`) или после массового действия.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Если выбраны ровно видимые строки, снимает выбор,
    /// иначе заменяет выбор видимыми строками
    pub fn toggle_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a str>) {
        let visible: BTreeSet<String> = visible.into_iter().map(str::to_string).collect();
        if !visible.is_empty() && visible == self.ids {
            self.ids.clear();
        } else {
            self.ids = visible;
        }
    }

    pub fn header_check<'a>(&self, visible: impl IntoIterator<Item = &'a str>) -> HeaderCheck {
        let visible: BTreeSet<&str> = visible.into_iter().collect();
        let selected_visible = visible.iter().filter(|id| self.ids.contains(**id)).count();
        if visible.is_empty() || selected_visible == 0 {
            HeaderCheck::Unchecked
        } else if selected_visible == visible.len() && visible.len() == self.ids.len() {
            HeaderCheck::Checked
        } else {
            HeaderCheck::Indeterminate
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    /// Удаляет id, которых больше нет среди загруженных записей.
    /// Возвращает количество удалённых.
    pub fn prune<'a>(&mut self, existing: impl IntoIterator<Item = &'a str>) -> usize {
        let existing: BTreeSet<&str> = existing.into_iter().collect();
        let before = self.ids.len();
        self.ids.retain(|id| existing.contains(id.as_str()));
        before - self.ids.len()
    }

    pub fn remove_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            self.ids.remove(id);
        }
    }
}
