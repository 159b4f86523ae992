//! Plan rendering and the file-backed plan sink.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use cineplan_core::{Festival, Plan};
use cineplan_solver::{Clock, PlanSink};
use tracing::{debug, error};

/// Columns between the longest title and the day number.
const TITLE_PADDING: usize = 3;

/// Renders a plan in the festival output format.
///
/// The first line holds the elapsed seconds with one decimal, the second
/// the day count. Each scheduled film then gets a line with its title
/// padded to the longest title plus three columns, the 1-based day, four
/// spaces and the cinema of its slot.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use cineplan::output::render_plan;
/// use cineplan_core::{FestivalLoader, Plan};
///
/// let festival = FestivalLoader::new()
///     .from_str("2 Up Alien 1 Up Alien 1 Rex")
///     .unwrap();
/// let plan = Plan::from_days([vec![0], vec![1]]);
/// let text = render_plan(&festival, &plan, Duration::from_millis(1200));
/// assert_eq!(text, "1.2\n2\nUp      1    Rex\nAlien   2    Rex\n");
/// ```
pub fn render_plan(festival: &Festival, plan: &Plan, elapsed: Duration) -> String {
    let model = &festival.model;
    let width = model
        .films()
        .iter()
        .map(|film| film.title().chars().count())
        .max()
        .unwrap_or(0)
        + TITLE_PADDING;

    let mut out = format!("{:.1}\n{}\n", elapsed.as_secs_f64(), plan.day_count());
    for (day, slot, film) in plan.assignments() {
        let title = model.film(film).title();
        let cinema = festival.cinemas.get(slot).map_or("", String::as_str);
        let pad = width - title.chars().count();
        out.push_str(&format!(
            "{title}{:pad$}{}    {cinema}\n",
            "",
            day + 1,
        ));
    }
    out
}

/// Replaces `path` with `contents` through a sibling temporary file, so
/// readers never observe a half-written plan.
pub fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

/// Rewrites the output file each time a solver publishes a plan.
///
/// A failed write is logged and remembered; solving continues so that a
/// later push can still succeed. [`FileSink::take_error`] reports the most
/// recent failure.
#[derive(Debug)]
pub struct FileSink<'f> {
    path: PathBuf,
    festival: &'f Festival,
    clock: Arc<dyn Clock>,
    writes: usize,
    last_error: Option<io::Error>,
}

impl<'f> FileSink<'f> {
    pub fn new(path: impl Into<PathBuf>, festival: &'f Festival, clock: Arc<dyn Clock>) -> Self {
        Self {
            path: path.into(),
            festival,
            clock,
            writes: 0,
            last_error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    fn write(&self, plan: &Plan) -> io::Result<()> {
        let text = render_plan(self.festival, plan, self.clock.elapsed());
        write_atomically(&self.path, &text)
    }
}

impl PlanSink for FileSink<'_> {
    fn push(&mut self, plan: &Plan) {
        match self.write(plan) {
            Ok(()) => {
                self.writes += 1;
                self.last_error = None;
                debug!(
                    event = "plan_written",
                    path = %self.path.display(),
                    days = plan.day_count(),
                );
            }
            Err(err) => {
                error!(
                    event = "plan_write_failed",
                    path = %self.path.display(),
                    error = %err,
                );
                self.last_error = Some(err);
            }
        }
    }
}
