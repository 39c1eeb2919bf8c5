// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Books — collections of scanned pages used to extrapolate a whole-book
// word count — and the saved-book history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PagewordsError, Result};
use crate::types::{BookId, ScanResult};

/// A book being sampled page by page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    /// Total page count of the physical book, if the user entered one.
    pub total_pages: Option<u32>,
    pub scans: Vec<ScanResult>,
    pub created_at: DateTime<Utc>,
    /// Set when the book is moved into the history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

/// Aggregate figures for a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStats {
    pub pages_scanned: usize,
    pub total_words: u64,
    /// Rounded mean words per scanned page; `None` with no scans.
    pub average_words: Option<u64>,
    /// `average_words * total_pages`; `None` without a page total.
    pub estimated_total: Option<u64>,
}

impl Book {
    /// A new, empty, untitled book.
    pub fn blank() -> Self {
        Self {
            id: BookId::new(),
            title: String::new(),
            total_pages: None,
            scans: Vec::new(),
            created_at: Utc::now(),
            saved_at: None,
        }
    }

    /// Title for display; blank titles read as "Untitled book".
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() { "Untitled book" } else { title }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.trim().to_string();
    }

    /// Set the physical page count. Zero clears it.
    pub fn set_total_pages(&mut self, pages: u32) {
        self.total_pages = (pages > 0).then_some(pages);
    }

    pub fn add_scan(&mut self, scan: ScanResult) {
        self.scans.push(scan);
    }

    /// Remove the scan at `index` (0-based) and return it.
    pub fn remove_scan(&mut self, index: usize) -> Result<ScanResult> {
        if index >= self.scans.len() {
            return Err(PagewordsError::InvalidInput(format!(
                "page {} does not exist; the book has {} scanned pages",
                index + 1,
                self.scans.len()
            )));
        }
        Ok(self.scans.remove(index))
    }

    pub fn stats(&self) -> BookStats {
        let pages_scanned = self.scans.len();
        let total_words: u64 = self.scans.iter().map(|s| u64::from(s.word_count)).sum();

        let average_words = (pages_scanned > 0)
            .then(|| (total_words as f64 / pages_scanned as f64).round() as u64);

        let estimated_total = match (average_words, self.total_pages) {
            (Some(avg), Some(pages)) if pages > 0 => {
                Some((avg as f64 * f64::from(pages)).round() as u64)
            }
            _ => None,
        };

        BookStats {
            pages_scanned,
            total_words,
            average_words,
            estimated_total,
        }
    }

    /// One-line summary used in history listings, e.g.
    /// `3 scans · avg 250 words/page · total 75000`.
    pub fn summary_line(&self) -> String {
        let stats = self.stats();
        let total = stats
            .estimated_total
            .map_or_else(|| "--".to_string(), |t| t.to_string());
        format!(
            "{} scans · avg {} words/page · total {}",
            stats.pages_scanned,
            stats.average_words.unwrap_or(0),
            total
        )
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::blank()
    }
}

/// Everything the application persists: the book in progress and the
/// saved books, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LibraryState {
    #[serde(default)]
    pub current_book: Book,
    #[serde(default)]
    pub history: Vec<Book>,
}

impl LibraryState {
    /// Move the current book into the history and start a blank one.
    ///
    /// Fails with [`PagewordsError::EmptyBook`] when nothing has been scanned.
    pub fn save_current_book(&mut self, now: DateTime<Utc>) -> Result<&Book> {
        if self.current_book.scans.is_empty() {
            return Err(PagewordsError::EmptyBook);
        }
        let mut snapshot = std::mem::take(&mut self.current_book);
        snapshot.saved_at = Some(now);
        self.history.insert(0, snapshot);
        Ok(&self.history[0])
    }

    /// Discard the current book.
    pub fn reset_current_book(&mut self) {
        self.current_book = Book::blank();
    }

    /// Delete a saved book by its position in the history (0-based).
    pub fn delete_saved_book(&mut self, index: usize) -> Result<Book> {
        if index >= self.history.len() {
            return Err(PagewordsError::InvalidInput(format!(
                "saved book {} does not exist; history has {} entries",
                index + 1,
                self.history.len()
            )));
        }
        Ok(self.history.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EstimationResult;

    fn fast_scan(word_count: u32) -> ScanResult {
        let estimate = EstimationResult {
            line_count: word_count / 10,
            threshold: 150,
            word_count,
        };
        ScanResult::from_estimate(&estimate, 10.0)
    }

    #[test]
    fn empty_book_has_no_average() {
        let stats = Book::blank().stats();
        assert_eq!(stats.pages_scanned, 0);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.average_words, None);
        assert_eq!(stats.estimated_total, None);
    }

    #[test]
    fn average_is_rounded_before_extrapolating() {
        let mut book = Book::blank();
        book.add_scan(fast_scan(250));
        book.add_scan(fast_scan(251));
        book.set_total_pages(300);

        let stats = book.stats();
        assert_eq!(stats.total_words, 501);
        // 250.5 rounds up
        assert_eq!(stats.average_words, Some(251));
        assert_eq!(stats.estimated_total, Some(251 * 300));
    }

    #[test]
    fn zero_pages_clears_total() {
        let mut book = Book::blank();
        book.set_total_pages(120);
        book.set_total_pages(0);
        assert_eq!(book.total_pages, None);
    }

    #[test]
    fn summary_line_without_page_total() {
        let mut book = Book::blank();
        book.add_scan(fast_scan(200));
        assert_eq!(book.summary_line(), "1 scans · avg 200 words/page · total --");
    }

    #[test]
    fn display_title_falls_back() {
        let mut book = Book::blank();
        assert_eq!(book.display_title(), "Untitled book");
        book.set_title("  Moby Dick ");
        assert_eq!(book.display_title(), "Moby Dick");
    }

    #[test]
    fn remove_scan_out_of_range() {
        let mut book = Book::blank();
        book.add_scan(fast_scan(100));
        assert!(matches!(
            book.remove_scan(1),
            Err(PagewordsError::InvalidInput(_))
        ));
        assert_eq!(book.remove_scan(0).unwrap().word_count, 100);
        assert!(book.scans.is_empty());
    }

    #[test]
    fn saving_empty_book_fails() {
        let mut state = LibraryState::default();
        assert!(matches!(
            state.save_current_book(Utc::now()),
            Err(PagewordsError::EmptyBook)
        ));
        assert!(state.history.is_empty());
    }

    #[test]
    fn saved_books_are_newest_first() {
        let mut state = LibraryState::default();

        state.current_book.set_title("First");
        state.current_book.add_scan(fast_scan(100));
        state.save_current_book(Utc::now()).unwrap();

        state.current_book.set_title("Second");
        state.current_book.add_scan(fast_scan(200));
        let saved = state.save_current_book(Utc::now()).unwrap();
        assert!(saved.saved_at.is_some());

        let titles: Vec<_> = state.history.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Second", "First"]);
        assert!(state.current_book.scans.is_empty());
        assert!(state.current_book.title.is_empty());
    }

    #[test]
    fn delete_saved_book_by_index() {
        let mut state = LibraryState::default();
        state.current_book.add_scan(fast_scan(100));
        state.save_current_book(Utc::now()).unwrap();

        assert!(state.delete_saved_book(1).is_err());
        state.delete_saved_book(0).unwrap();
        assert!(state.history.is_empty());
    }

    #[test]
    fn reset_discards_scans() {
        let mut state = LibraryState::default();
        state.current_book.add_scan(fast_scan(100));
        let old_id = state.current_book.id;
        state.reset_current_book();
        assert!(state.current_book.scans.is_empty());
        assert_ne!(state.current_book.id, old_id);
    }
}
