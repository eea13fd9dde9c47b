// src/data.rs
//! Shapes shared by the extractor, the aggregator and the exporter.

/// One weekday slot of one task on one page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekDay {
    /// e.g. `"lun01/07/24"`; the identity of a day column
    pub day: String,
    pub date: String,
    pub hours: String,
}

/// A header cell of the weekly grid. Two columns are the same column iff their day labels match.
#[derive(Clone, Debug, Default, Eq)]
pub struct DayColumn {
    pub day: String,
    pub date: String,
}

impl PartialEq for DayColumn {
    fn eq(&self, other: &Self) -> bool {
        self.day == other.day
    }
}

impl DayColumn {
    pub fn with_hours(&self, hours: impl Into<String>) -> WeekDay {
        WeekDay { day: self.day.clone(), date: self.date.clone(), hours: hours.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskRecord {
    pub task_id: String,
    pub task_name: String,
    pub project_ref: String,
    pub project_name: String,
    pub client: String,
    pub task_type: String,
    pub time_dedicated: String,
    pub progress: String,
    pub week_days: Vec<WeekDay>,
}

/// Everything one weekly page yields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekPage {
    pub day_columns: Vec<DayColumn>,
    pub tasks: Vec<TaskRecord>,
}

/// Fixed metadata columns, in output order.
pub const FIXED_HEADERS: [&str; 7] = [
    "Ref de proyecto",
    "Nombre de tarea",
    "Nombre de proyecto",
    "Cliente",
    "Tipo de tarea",
    "Progreso",
    "Tiempo dedicado",
];

/// Header + rows, all strings, ready to be written as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// Day-column headers, i.e. everything after the fixed metadata columns.
    pub fn day_headers(&self) -> &[String] {
        self.headers.get(FIXED_HEADERS.len()..).unwrap_or(&[])
    }
}
