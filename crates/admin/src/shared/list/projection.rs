use contracts::shared::record::Record;

use super::comparator::compare_directed;
use super::filter::ListFilter;
use super::sort::SortState;

/// Видимые строки: отфильтрованные записи, затем стабильная сортировка.
///
/// Без сортировки порядок совпадает с исходным. Ничего не кэшируется,
/// каждый вызов пересчитывает результат заново.
pub fn project<'a, R: Record>(
    records: &'a [R],
    filter: &ListFilter<R::Field>,
    sort: &SortState<R::Field>,
) -> Vec<&'a R> {
    let mut rows: Vec<&R> = records.iter().filter(|r| filter.matches(*r)).collect();

    if let (Some(field), Some(direction)) = (sort.field(), sort.direction()) {
        // sort_by стабильна: равные значения сохраняют порядок
        rows.sort_by(|a, b| compare_directed(&a.field(field), &b.field(field), direction));
    }

    rows
}
