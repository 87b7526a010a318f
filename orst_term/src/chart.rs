//! A vertical bar chart drawn straight into the terminal.
//!
//! [`BarChart`] is a [`StepSink`]: it keeps its own copy of the values, highlights the two bars a
//! step touches, and redraws the whole chart in place (cursor home, no scrolling) whenever
//! something happens.

use std::io::{self, Write};

use colored::{Color, Colorize};
use orst_engine::{SortError, StepSink};

const BAR: &str = "█";
const GAP: &str = " ";

const IDLE: Color = Color::Cyan;
const COMPARING: Color = Color::Blue;
const SWAPPING: Color = Color::Red;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Highlight {
    None,
    Compare(usize, usize),
    Swap(usize, usize),
}

impl Highlight {
    fn color_of(&self, index: usize) -> Color {
        match *self {
            Highlight::Compare(i, j) if index == i || index == j => COMPARING,
            Highlight::Swap(i, j) if index == i || index == j => SWAPPING,
            _ => IDLE,
        }
    }
}

pub struct BarChart<W: Write> {
    out: W,
    values: Vec<u32>,
    height: usize,
    tallest: u32,
    highlight: Highlight,
    comparisons: u64,
    swaps: u64,
}

impl<W: Write> BarChart<W> {
    /// A chart `height` rows tall for `values`. Bars are scaled against the largest value.
    pub fn new(out: W, values: &[u32], height: usize) -> Self {
        Self {
            out,
            values: values.to_vec(),
            height: height.max(1),
            tallest: values.iter().copied().max().unwrap_or(1).max(1),
            highlight: Highlight::None,
            comparisons: 0,
            swaps: 0,
        }
    }

    /// Clears the screen and draws the first frame.
    pub fn start(&mut self) -> io::Result<()> {
        write!(self.out, "\x1b[2J")?;
        self.draw()
    }

    /// Draws the final frame with no highlight.
    pub fn finish(&mut self) -> io::Result<()> {
        self.highlight = Highlight::None;
        self.draw()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Number of rows the bar for `value` fills.
    fn bar_height(&self, value: u32) -> usize {
        (value as u64 * self.height as u64).div_ceil(self.tallest as u64) as usize
    }

    fn draw(&mut self) -> io::Result<()> {
        let mut frame = String::from("\x1b[H");

        for row in (1..=self.height).rev() {
            for (index, &value) in self.values.iter().enumerate() {
                if self.bar_height(value) >= row {
                    let bar = BAR.color(self.highlight.color_of(index));
                    frame.push_str(&bar.to_string());
                } else {
                    frame.push_str(GAP);
                }
            }
            frame.push('\n');
        }

        frame.push_str(&format!(
            "{} {}  {} {}\n",
            "Comparisons:".bold(),
            self.comparisons.to_string().blue(),
            "Swaps:".bold(),
            self.swaps.to_string().red(),
        ));

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }

    fn redraw(&mut self, highlight: Highlight) -> orst_engine::Result<()> {
        self.highlight = highlight;
        self.draw().map_err(SortError::sink)
    }
}

impl<W: Write> StepSink<u32> for BarChart<W> {
    fn compare(&mut self, i: usize, j: usize) -> orst_engine::Result<()> {
        self.comparisons += 1;
        self.redraw(Highlight::Compare(i, j))
    }

    fn swap(&mut self, i: usize, j: usize) -> orst_engine::Result<()> {
        self.swaps += 1;
        self.redraw(Highlight::Swap(i, j))
    }

    fn render(&mut self, values: &[u32]) -> orst_engine::Result<()> {
        self.values.clear();
        self.values.extend_from_slice(values);
        self.redraw(self.highlight)
    }
}
