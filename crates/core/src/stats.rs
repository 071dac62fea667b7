//! Collection aggregates: status counts, completion rate, genre and director
//! tallies, and year extremes.

use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::CatalogEntry;
use crate::dvd::DvdStatus;

/// How many entries the top-genre and top-director lists keep.
pub const TOP_N: usize = 5;

/// Separator between labels in a multi-genre string.
pub const GENRE_SEPARATOR: &str = ", ";

/// One ranked label with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCount {
    pub name: String,
    pub count: usize,
}

/// Aggregates derived from a collection of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    pub total: usize,
    pub owned_count: usize,
    pub wishlist_count: usize,
    /// Percentage of records that are owned, rounded; 0 for an empty collection.
    pub completion_rate: u32,
    /// Label → count, in first-encountered order.
    pub genre_counts: IndexMap<String, usize>,
    pub director_counts: IndexMap<String, usize>,
    pub oldest_year: Option<i32>,
    pub newest_year: Option<i32>,
    pub average_year: Option<i32>,
    pub top_genres: Vec<RankedCount>,
    pub top_directors: Vec<RankedCount>,
}

impl CollectionStats {
    pub fn compute<'a, E, I>(entries: I) -> Self
    where
        E: CatalogEntry + ?Sized + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        let mut total = 0;
        let mut owned_count = 0;
        let mut wishlist_count = 0;
        let mut genre_counts: IndexMap<String, usize> = IndexMap::new();
        let mut director_counts: IndexMap<String, usize> = IndexMap::new();
        let mut years: Vec<i32> = Vec::new();

        for entry in entries {
            total += 1;
            match entry.status() {
                DvdStatus::Owned => owned_count += 1,
                DvdStatus::Wishlist => wishlist_count += 1,
            }

            if let Some(genre) = entry.genre() {
                for label in split_genres(genre) {
                    *genre_counts.entry(label.to_string()).or_insert(0) += 1;
                }
            }
            if let Some(director) = entry.director().filter(|d| !d.is_empty()) {
                *director_counts.entry(director.to_string()).or_insert(0) += 1;
            }
            if let Some(year) = entry.year() {
                years.push(year);
            }
        }

        let top_genres = top_n(&genre_counts, TOP_N);
        let top_directors = top_n(&director_counts, TOP_N);

        Self {
            total,
            owned_count,
            wishlist_count,
            completion_rate: completion_rate(owned_count, total),
            genre_counts,
            director_counts,
            oldest_year: years.iter().copied().min(),
            newest_year: years.iter().copied().max(),
            average_year: average_year(&years),
            top_genres,
            top_directors,
        }
    }
}

/// Split a multi-genre string into its labels, skipping empty ones.
pub fn split_genres(genre: &str) -> impl Iterator<Item = &str> {
    genre.split(GENRE_SEPARATOR).filter(|label| !label.is_empty())
}

/// `round(100 * owned / total)`, or 0 when the collection is empty.
pub fn completion_rate(owned: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * owned as f64 / total as f64).round() as u32
}

fn average_year(years: &[i32]) -> Option<i32> {
    if years.is_empty() {
        return None;
    }
    let sum: i64 = years.iter().map(|&y| i64::from(y)).sum();
    Some((sum as f64 / years.len() as f64).round() as i32)
}

/// Highest counts first. The sort is stable, so ties keep first-encountered order.
pub fn top_n(counts: &IndexMap<String, usize>, n: usize) -> Vec<RankedCount> {
    let mut ranked: Vec<RankedCount> = counts
        .iter()
        .map(|(name, &count)| RankedCount {
            name: name.clone(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{entry, shelf, Entry};

    #[test]
    fn empty_collection_has_zero_rate_and_no_years() {
        let stats = CollectionStats::compute(Vec::<&Entry>::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.oldest_year, None);
        assert_eq!(stats.newest_year, None);
        assert_eq!(stats.average_year, None);
        assert!(stats.top_genres.is_empty());
    }

    #[test]
    fn status_counts_partition_total() {
        let shelf = shelf();
        let stats = CollectionStats::compute(&shelf);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.owned_count, 2);
        assert_eq!(stats.wishlist_count, 2);
        assert_eq!(stats.owned_count + stats.wishlist_count, stats.total);
        assert_eq!(stats.completion_rate, 50);
    }

    #[test]
    fn completion_rate_rounds() {
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(1, 8), 13);
        assert_eq!(completion_rate(0, 0), 0);
    }

    #[test]
    fn multi_label_genres_count_each_label() {
        let inception = Entry {
            genre: Some("Action, Sci-Fi"),
            ..entry("Inception", DvdStatus::Owned, Some(2010))
        };
        let stats = CollectionStats::compute([&inception]);
        assert_eq!(stats.genre_counts.get("Action"), Some(&1));
        assert_eq!(stats.genre_counts.get("Sci-Fi"), Some(&1));
        assert_eq!(stats.genre_counts.len(), 2);
    }

    #[test]
    fn year_extremes_ignore_undated_records() {
        let shelf = shelf();
        let stats = CollectionStats::compute(&shelf);
        assert_eq!(stats.oldest_year, Some(1995));
        assert_eq!(stats.newest_year, Some(2010));
        // (2010 + 1995 + 2000) / 3 = 2001.67
        assert_eq!(stats.average_year, Some(2002));
    }

    #[test]
    fn directors_are_counted_whole() {
        let shelf = shelf();
        let stats = CollectionStats::compute(&shelf);
        assert_eq!(stats.director_counts.get("Christopher Nolan"), Some(&2));
        assert_eq!(stats.director_counts.get("Michael Mann"), Some(&1));
        assert_eq!(
            stats.top_directors.first(),
            Some(&RankedCount {
                name: "Christopher Nolan".into(),
                count: 2
            })
        );
    }

    #[test]
    fn top_n_breaks_ties_by_first_seen() {
        let mut counts = IndexMap::new();
        for (name, count) in [("Drama", 2), ("Action", 3), ("Crime", 2), ("Comedy", 1)] {
            counts.insert(name.to_string(), count);
        }
        let names: Vec<String> = top_n(&counts, 3).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Action", "Drama", "Crime"]);
    }

    #[test]
    fn top_genres_are_capped() {
        let mut counts = IndexMap::new();
        for (i, name) in ["A", "B", "C", "D", "E", "F", "G"].iter().enumerate() {
            counts.insert(name.to_string(), i);
        }
        let top = top_n(&counts, TOP_N);
        assert_eq!(top.len(), TOP_N);
        assert_eq!(top[0].name, "G");
    }

    #[test]
    fn empty_genre_labels_are_skipped() {
        let labels: Vec<&str> = split_genres("Drama, ").collect();
        assert_eq!(labels, vec!["Drama"]);
    }

    #[test]
    fn serializes_camel_case() {
        let shelf = shelf();
        let json = serde_json::to_value(CollectionStats::compute(&shelf)).unwrap();
        assert_eq!(json["ownedCount"], 2);
        assert_eq!(json["completionRate"], 50);
        assert_eq!(json["topGenres"][0]["name"], "Drama");
        assert_eq!(json["topGenres"][0]["count"], 2);
    }
}
