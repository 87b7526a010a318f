//! Receivers for the steps a sorter takes.
//!
//! A [`StepSink`] is told about every comparison and every exchange the moment it happens, and
//! gets a render checkpoint after every step that changed the array. Sinks do not wait: pacing
//! is the engine's job (see [`RunConfig`](crate::RunConfig)), so the same sink works for a
//! silent test run and for a slowed-down visual one.

use crate::Result;

/// One observable step of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepEvent {
    /// The values at both positions are about to be compared. Never mutates the array.
    Compare(usize, usize),

    /// The values at both positions were exchanged. Merge sort reports a placement as
    /// `Swap(dest, src)` where `src` indexes the snapshot taken for the current merge.
    Swap(usize, usize),
}

/// The pair of step callbacks plus the optional render checkpoint.
pub trait StepSink<T> {
    /// Called before the outcome of a comparison between `i` and `j` influences the algorithm.
    fn compare(&mut self, i: usize, j: usize) -> Result<()>;

    /// Called right after the values at `i` and `j` were exchanged.
    fn swap(&mut self, i: usize, j: usize) -> Result<()>;

    /// Called after every step that changed the array, with its current contents.
    fn render(&mut self, values: &[T]) -> Result<()> {
        let _ = values;
        Ok(())
    }
}

impl<T, S> StepSink<T> for &mut S
where
    S: StepSink<T> + ?Sized,
{
    fn compare(&mut self, i: usize, j: usize) -> Result<()> {
        (**self).compare(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        (**self).swap(i, j)
    }

    fn render(&mut self, values: &[T]) -> Result<()> {
        (**self).render(values)
    }
}

/// A sink that ignores everything. Useful when only the sorted result matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl<T> StepSink<T> for NoopSink {
    fn compare(&mut self, _: usize, _: usize) -> Result<()> {
        Ok(())
    }

    fn swap(&mut self, _: usize, _: usize) -> Result<()> {
        Ok(())
    }
}

/// Keeps every step in order, along with the number of render checkpoints.
///
/// # Usage
///```
/// use orst_engine::{sort, Algorithm, RecordingSink, RunConfig, StepEvent};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let mut slice = [2, 1];
/// let mut sink = RecordingSink::default();
/// sort(Algorithm::Bubble, &mut slice, &mut sink, &RunConfig::new()).await.unwrap();
///
/// assert_eq!(slice, [1, 2]);
/// assert_eq!(
///     sink.events(),
///     &[StepEvent::Compare(0, 1), StepEvent::Swap(0, 1)]
/// );
/// # });
///```
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<StepEvent>,
    renders: usize,
}

impl RecordingSink {
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn comparisons(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.events.iter().filter_map(|event| match *event {
            StepEvent::Compare(i, j) => Some((i, j)),
            StepEvent::Swap(..) => None,
        })
    }

    pub fn swaps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.events.iter().filter_map(|event| match *event {
            StepEvent::Swap(i, j) => Some((i, j)),
            StepEvent::Compare(..) => None,
        })
    }

    pub fn into_events(self) -> Vec<StepEvent> {
        self.events
    }
}

impl<T> StepSink<T> for RecordingSink {
    fn compare(&mut self, i: usize, j: usize) -> Result<()> {
        self.events.push(StepEvent::Compare(i, j));
        Ok(())
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.events.push(StepEvent::Swap(i, j));
        Ok(())
    }

    fn render(&mut self, _: &[T]) -> Result<()> {
        self.renders += 1;
        Ok(())
    }
}

type RenderFn<'f, T> = Box<dyn FnMut(&[T]) -> Result<()> + 'f>;

/// A sink built from closures: `on_compare`, `on_swap` and an optional `on_render`.
///
/// # Usage
///```
/// use orst_engine::{sort, Algorithm, Callbacks, RunConfig};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let mut compares = 0;
/// let mut swaps = Vec::new();
/// let mut slice = [3, 1, 2];
///
/// let mut sink = Callbacks::new(
///     |_, _| {
///         compares += 1;
///         Ok(())
///     },
///     |i, j| {
///         swaps.push((i, j));
///         Ok(())
///     },
/// );
/// sort(Algorithm::Selection, &mut slice, &mut sink, &RunConfig::new()).await.unwrap();
/// drop(sink);
///
/// assert_eq!(slice, [1, 2, 3]);
/// assert_eq!(compares, 3);
/// assert_eq!(swaps, vec![(0, 1), (1, 2)]);
/// # });
///```
pub struct Callbacks<'f, T, C, S> {
    on_compare: C,
    on_swap: S,
    on_render: Option<RenderFn<'f, T>>,
}

impl<'f, T, C, S> Callbacks<'f, T, C, S>
where
    C: FnMut(usize, usize) -> Result<()>,
    S: FnMut(usize, usize) -> Result<()>,
{
    pub fn new(on_compare: C, on_swap: S) -> Self {
        Self {
            on_compare,
            on_swap,
            on_render: None,
        }
    }

    /// Adds a render checkpoint callback.
    pub fn on_render<R>(mut self, on_render: R) -> Self
    where
        R: FnMut(&[T]) -> Result<()> + 'f,
    {
        self.on_render = Some(Box::new(on_render));
        self
    }
}

impl<T, C, S> StepSink<T> for Callbacks<'_, T, C, S>
where
    C: FnMut(usize, usize) -> Result<()>,
    S: FnMut(usize, usize) -> Result<()>,
{
    fn compare(&mut self, i: usize, j: usize) -> Result<()> {
        (self.on_compare)(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        (self.on_swap)(i, j)
    }

    fn render(&mut self, values: &[T]) -> Result<()> {
        match self.on_render.as_mut() {
            Some(on_render) => on_render(values),
            None => Ok(()),
        }
    }
}
