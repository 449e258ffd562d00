/*!
 * Small column oriented in-memory table with read-only queries.
 * Every query returns new value (usually new `Table`), source table is never modified.
 */

use std::collections::BTreeMap;

use anyhow::Result;

use crate::{quantile, Aggregator, Measure};

/// Number of rows shown by `head()` when caller does not care.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Values of one column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Text(Vec<String>),
    Int(Vec<i64>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Text(v) => v.len(),
            ColumnData::Int(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies values at `positions` in given order.
    fn select(&self, positions: &[usize]) -> Self {
        match self {
            ColumnData::Text(v) => ColumnData::Text(positions.iter().map(|p| v[*p].clone()).collect()),
            ColumnData::Int(v) => ColumnData::Int(positions.iter().map(|p| v[*p]).collect()),
        }
    }
}

/// Named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn text(name: &str, values: &[&str]) -> Self {
        Column { name: name.to_string(), data: ColumnData::Text(values.iter().map(|s| s.to_string()).collect()) }
    }

    pub fn int(name: &str, values: &[i64]) -> Self {
        Column { name: name.to_string(), data: ColumnData::Int(values.to_vec()) }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn data(&self) -> &ColumnData { &self.data }
    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
}

/// Table of equally long columns.
/// `index` keeps row labels of the table the rows were originally inserted into,
/// so filtered views still tell which rows they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    index: Vec<usize>,
}

impl Table {
    /// Create table from columns; row labels are `0..rows`.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let rows = columns.first().map_or(0, Column::len);
        for (i, c) in columns.iter().enumerate() {
            if c.len() != rows {
                bail!("Column '{}' has {} rows, expected {}", c.name, c.len(), rows);
            }
            if columns[..i].iter().any(|o| o.name == c.name) {
                bail!("Duplicated column name '{}'", c.name);
            }
        }
        Ok(Table { columns, index: (0..rows).collect() })
    }

    /// Fixed demo dataset of five employees.
    pub fn employees() -> Result<Self> {
        Table::new(vec![
            Column::text("Name", &["Alice", "Bob", "Charlie", "Diana", "Eve"]),
            Column::int("Age", &[25, 30, 35, 28, 32]),
            Column::text("City", &["New York", "London", "Tokyo", "Paris", "Berlin"]),
            Column::int("Salary", &[50000, 60000, 75000, 55000, 68000]),
            Column::text("Department", &["Engineering", "Marketing", "Engineering", "Sales", "Marketing"]),
        ])
    }

    pub fn num_rows(&self) -> usize { self.index.len() }
    pub fn num_columns(&self) -> usize { self.columns.len() }
    pub fn columns(&self) -> &[Column] { &self.columns }
    pub fn index(&self) -> &[usize] { &self.index }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    fn existing_column(&self, name: &str) -> Result<&Column> {
        match self.column(name) {
            Some(c) => Ok(c),
            None => bail!("No column '{}', available: {:?}", name, self.column_names()),
        }
    }

    fn int_column(&self, name: &str) -> Result<&[i64]> {
        match &self.existing_column(name)?.data {
            ColumnData::Int(v) => Ok(v),
            ColumnData::Text(_) => bail!("Column '{}' is not numeric", name),
        }
    }

    /// New table with rows at `positions` (not labels) in given order.
    fn select(&self, positions: &[usize]) -> Table {
        Table {
            columns: self.columns.iter()
                .map(|c| Column { name: c.name.clone(), data: c.data.select(positions) })
                .collect(),
            index: positions.iter().map(|p| self.index[*p]).collect(),
        }
    }

    /// First `n` rows (all of them if table is shorter).
    pub fn head(&self, n: usize) -> Table {
        let positions: Vec<usize> = (0..n.min(self.num_rows())).collect();
        self.select(&positions)
    }

    /// Rows where integer `column` satisfies `pred`, in original order.
    pub fn filter_int(&self, column: &str, pred: impl Fn(i64) -> bool) -> Result<Table> {
        let values = self.int_column(column)?;
        let positions: Vec<usize> = values.iter().enumerate()
            .filter(|(_, v)| pred(**v))
            .map(|(i, _)| i)
            .collect();
        Ok(self.select(&positions))
    }

    /// Summary statistics of every integer column, in column order.
    pub fn describe(&self, agg: &impl Aggregator) -> Describe {
        let columns = self.columns.iter()
            .filter_map(|c| match &c.data {
                ColumnData::Int(v) => Some((c.name.clone(), Summary::of(v, agg))),
                ColumnData::Text(_) => None,
            })
            .collect();
        Describe { columns }
    }

    /// Mean of integer `value` column for every distinct text `key`, ordered by key.
    pub fn group_mean(&self, key: &str, value: &str, agg: &impl Aggregator) -> Result<GroupMeans> {
        let keys = match &self.existing_column(key)?.data {
            ColumnData::Text(v) => v,
            ColumnData::Int(_) => bail!("Grouping key '{}' must be a text column", key),
        };
        let values = self.int_column(value)?;

        let mut groups: BTreeMap<&str, Vec<i64>> = BTreeMap::new();
        for (k, v) in keys.iter().zip(values) {
            groups.entry(k.as_str()).or_default().push(*v);
        }
        let mut means = Vec::with_capacity(groups.len());
        for (k, vs) in groups {
            let mean = agg.mean(&vs).ok_or_else(|| anyhow!("Empty group '{}'", k))?;
            means.push((k.to_string(), mean));
        }
        Ok(GroupMeans { key: key.to_string(), value: value.to_string(), groups: means })
    }
}

/// Summary statistics of one numeric column.
/// Statistics that are undefined for given number of values (e.g. std of one value) are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: Option<Measure>,
    pub std: Option<Measure>,
    pub min: Option<Measure>,
    pub q25: Option<Measure>,
    pub q50: Option<Measure>,
    pub q75: Option<Measure>,
    pub max: Option<Measure>,
}

impl Summary {
    pub fn of(values: &[i64], agg: &impl Aggregator) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        let q = |p| quantile(&sorted, p).ok();
        Summary {
            count: values.len(),
            mean: agg.mean(values),
            std: agg.std_dev(values),
            min: sorted.first().map(|v| *v as Measure),
            q25: q(0.25),
            q50: q(0.5),
            q75: q(0.75),
            max: sorted.last().map(|v| *v as Measure),
        }
    }
}

/// Result of `Table::describe()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Describe {
    columns: Vec<(String, Summary)>,
}

impl Describe {
    pub fn columns(&self) -> &[(String, Summary)] { &self.columns }

    pub fn get(&self, column: &str) -> Option<&Summary> {
        self.columns.iter().find(|(n, _)| n == column).map(|(_, s)| s)
    }
}

/// Result of `Table::group_mean()`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMeans {
    key: String,
    value: String,
    groups: Vec<(String, Measure)>,
}

impl GroupMeans {
    pub fn key(&self) -> &str { &self.key }
    pub fn value(&self) -> &str { &self.value }
    pub fn groups(&self) -> &[(String, Measure)] { &self.groups }

    pub fn get(&self, key: &str) -> Option<Measure> {
        self.groups.iter().find(|(k, _)| k == key).map(|(_, m)| *m)
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator_factory;

    fn text(t: &Table, column: &str) -> Vec<String> {
        match t.column(column).unwrap().data() {
            ColumnData::Text(v) => v.clone(),
            other => panic!("unexpected {:?}", other),
        }
    }

    fn ints(t: &Table, column: &str) -> Vec<i64> {
        match t.column(column).unwrap().data() {
            ColumnData::Int(v) => v.clone(),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn employees_shape() {
        let t = Table::employees().unwrap();
        assert_eq!(t.num_rows(), 5);
        assert_eq!(t.num_columns(), 5);
        assert_eq!(t.column_names(), vec!["Name", "Age", "City", "Salary", "Department"]);
        assert_eq!(t.index(), &[0, 1, 2, 3, 4]);
        assert!(t.columns().iter().all(|c| c.len() == 5));
    }

    #[test]
    fn employees_text_columns() {
        let t = Table::employees().unwrap();
        assert_eq!(text(&t, "Name"), vec!["Alice", "Bob", "Charlie", "Diana", "Eve"]);
        assert_eq!(text(&t, "City"), vec!["New York", "London", "Tokyo", "Paris", "Berlin"]);
        assert_eq!(text(&t, "Department"), vec!["Engineering", "Marketing", "Engineering", "Sales", "Marketing"]);
        assert_eq!(ints(&t, "Age"), vec![25, 30, 35, 28, 32]);
        assert_eq!(ints(&t, "Salary"), vec![50000, 60000, 75000, 55000, 68000]);
    }

    #[test]
    fn head_default_is_whole_table() {
        let t = Table::employees().unwrap();
        assert_eq!(t.head(DEFAULT_PREVIEW_ROWS), t);
    }

    #[test]
    fn head_shorter() {
        let t = Table::employees().unwrap();
        let h = t.head(2);
        assert_eq!(h.num_rows(), 2);
        assert_eq!(text(&h, "Name"), vec!["Alice", "Bob"]);
        assert_eq!(t.head(0).num_rows(), 0);
        assert_eq!(t.head(100).num_rows(), 5);
    }

    #[test]
    fn filter_age_over_30() {
        let t = Table::employees().unwrap();
        let f = t.filter_int("Age", |a| a > 30).unwrap();
        assert_eq!(f.num_rows(), 2);
        assert_eq!(f.num_columns(), 5);
        assert_eq!(text(&f, "Name"), vec!["Charlie", "Eve"]);
        assert_eq!(ints(&f, "Age"), vec![35, 32]);
        assert_eq!(text(&f, "City"), vec!["Tokyo", "Berlin"]);
        assert_eq!(f.index(), &[2, 4]);
    }

    #[test]
    fn filter_of_filter_keeps_labels() {
        let t = Table::employees().unwrap();
        let f = t.filter_int("Age", |a| a > 30).unwrap()
            .filter_int("Salary", |s| s < 70000).unwrap();
        assert_eq!(text(&f, "Name"), vec!["Eve"]);
        assert_eq!(f.index(), &[4]);
    }

    #[test]
    fn filter_errors() {
        let t = Table::employees().unwrap();
        assert!(t.filter_int("Height", |_| true).is_err());
        assert!(t.filter_int("Name", |_| true).is_err());
    }

    #[test]
    fn group_mean_salary_by_department() {
        let t = Table::employees().unwrap();
        let g = t.group_mean("Department", "Salary", &aggregator_factory()).unwrap();
        let keys: Vec<&str> = g.groups().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Engineering", "Marketing", "Sales"]);
        assert_eq!(g.get("Engineering"), Some(62500.0));
        assert_eq!(g.get("Marketing"), Some(64000.0));
        assert_eq!(g.get("Sales"), Some(55000.0));
        assert_eq!(g.get("HR"), None);
        assert_eq!(g.key(), "Department");
        assert_eq!(g.value(), "Salary");
    }

    #[test]
    fn group_mean_errors() {
        let t = Table::employees().unwrap();
        let agg = aggregator_factory();
        assert!(t.group_mean("Age", "Salary", &agg).is_err());
        assert!(t.group_mean("Department", "City", &agg).is_err());
        assert!(t.group_mean("Team", "Salary", &agg).is_err());
    }

    #[test]
    fn describe_numeric_columns() {
        let t = Table::employees().unwrap();
        let d = t.describe(&aggregator_factory());
        let names: Vec<&str> = d.columns().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Age", "Salary"]);

        let age = d.get("Age").unwrap();
        assert_eq!(age.count, 5);
        assert_eq!(age.min, Some(25.0));
        assert_eq!(age.max, Some(35.0));
        assert_eq!(age.q25, Some(28.0));
        assert_eq!(age.q50, Some(30.0));
        assert_eq!(age.q75, Some(32.0));
        assert!((age.mean.unwrap() - 30.0).abs() < 1e-9);
        assert!((age.std.unwrap() - 14.5f64.sqrt()).abs() < 1e-9);

        let salary = d.get("Salary").unwrap();
        assert_eq!(salary.count, 5);
        assert_eq!(salary.min, Some(50000.0));
        assert_eq!(salary.q50, Some(60000.0));
        assert_eq!(salary.max, Some(75000.0));
        assert!((salary.mean.unwrap() - 61600.0).abs() < 1e-6);
        assert!(d.get("Name").is_none());
    }

    #[test]
    fn describe_empty_table() {
        let t = Table::employees().unwrap().head(0);
        let d = t.describe(&aggregator_factory());
        let age = d.get("Age").unwrap();
        assert_eq!(age.count, 0);
        assert_eq!(age.mean, None);
        assert_eq!(age.min, None);
        assert_eq!(age.q50, None);
    }

    #[test]
    fn queries_are_idempotent() {
        let t = Table::employees().unwrap();
        let copy = t.clone();
        let agg = aggregator_factory();
        assert_eq!(t.describe(&agg), t.describe(&agg));
        assert_eq!(t.filter_int("Age", |a| a > 30).unwrap(), t.filter_int("Age", |a| a > 30).unwrap());
        assert_eq!(t.group_mean("Department", "Salary", &agg).unwrap(),
                   t.group_mean("Department", "Salary", &agg).unwrap());
        assert_eq!(t.head(DEFAULT_PREVIEW_ROWS), t.head(DEFAULT_PREVIEW_ROWS));
        assert_eq!(t, copy);
    }

    #[test]
    fn new_rejects_unequal_columns() {
        let err = Table::new(vec![
            Column::int("a", &[1, 2]),
            Column::int("b", &[1]),
        ]).unwrap_err();
        assert!(err.to_string().contains("'b'"));
    }

    #[test]
    fn new_rejects_duplicated_names() {
        assert!(Table::new(vec![Column::int("a", &[1]), Column::text("a", &["x"])]).is_err());
    }

    #[test]
    fn new_empty() {
        let t = Table::new(Vec::new()).unwrap();
        assert_eq!(t.num_rows(), 0);
        assert_eq!(t.num_columns(), 0);
    }
}
