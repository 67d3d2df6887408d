use ei_core::model::{Category, ScoreVector};
use sqlx::Row;

use crate::repository::{ResultRow, StorageError};

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Column holding each category total, in `Category::ALL` order.
pub(crate) const SCORE_COLUMNS: [&str; 5] = [
    "self_awareness",
    "managing_emotions",
    "motivating_oneself",
    "empathy",
    "social_skill",
];

pub(crate) fn score_to_i64(scores: &ScoreVector, category: Category) -> i64 {
    i64::from(scores.get(category))
}

fn u16_from_i64(field: &'static str, v: i64) -> Result<u16, StorageError> {
    u16::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

pub(crate) fn map_result_row(row: &sqlx::sqlite::SqliteRow) -> Result<ResultRow, StorageError> {
    let mut totals = [0_u16; 5];
    for (slot, column) in totals.iter_mut().zip(SCORE_COLUMNS) {
        *slot = u16_from_i64(column, row.try_get::<i64, _>(column).map_err(ser)?)?;
    }

    Ok(ResultRow {
        submitted_at: row.try_get("submitted_at").map_err(ser)?,
        name: row.try_get("name").map_err(ser)?,
        organization: row.try_get("organization").map_err(ser)?,
        scores: ScoreVector::from_totals(totals).map_err(ser)?,
    })
}
