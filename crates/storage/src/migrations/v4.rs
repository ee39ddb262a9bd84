//! Migration v4: lookup indexes

pub(super) const SQL: &str = "
DROP INDEX IF EXISTS idx_title;
DROP INDEX IF EXISTS idx_niche_date;
DROP INDEX IF EXISTS idx_niche_day;

CREATE INDEX IF NOT EXISTS idx_ideas_category_date ON ideas_log(category, entry_date);
CREATE INDEX IF NOT EXISTS idx_ideas_category_day ON ideas_log(category, sequence_day);
CREATE INDEX IF NOT EXISTS idx_ideas_title_key ON ideas_log(title_key);
";
