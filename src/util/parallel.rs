use crate::error::TGError;
use crossbeam_channel::unbounded;
use crossbeam_utils::thread;
use log::debug;
use std::num::NonZeroUsize;

/// Applies `func` to every item on a pool of `thread_count` scoped threads and returns the
/// results in input order.
///
/// Items are handed out through a shared task channel tagged with their input index; workers send
/// index-tagged results back on a second channel and each result is stored at its index, so
/// completion order does not matter. Every item is processed even after a failure; the error of
/// the first failed task to be received is then returned. A panicking worker yields
/// `TGError::Worker`.
pub fn parallel_map<T, R, F>(
    items: Vec<T>,
    thread_count: NonZeroUsize,
    func: F,
) -> Result<Vec<R>, TGError>
where
    T: Send,
    R: Send,
    F: Fn(T) -> Result<R, TGError> + Sync,
{
    let total = items.len();
    if total == 0 {
        return Ok(Vec::new());
    }
    let workers = std::cmp::min(thread_count.get(), total);

    let (task_sender, task_receiver) = unbounded::<(usize, T)>();
    for task in items.into_iter().enumerate() {
        task_sender
            .send(task)
            .map_err(|_| TGError::Worker("Task queue closed before dispatch".to_owned()))?;
    }
    drop(task_sender);

    let (result_sender, result_receiver) = unbounded::<(usize, Result<R, TGError>)>();
    let func = &func;
    let (slots, first_error) = thread::scope(|s| {
        for _ in 0..workers {
            let tasks = task_receiver.clone();
            let results = result_sender.clone();
            s.spawn(move |_| {
                for (index, item) in tasks.iter() {
                    if results.send((index, func(item))).is_err() {
                        break;
                    }
                }
            });
        }
        drop(result_sender);

        let mut slots: Vec<Option<R>> = (0..total).map(|_| None).collect();
        let mut first_error = None;
        for (done, (index, result)) in result_receiver.iter().enumerate() {
            debug!("Finished task {} ({}/{})", index, done + 1, total);
            match result {
                Ok(value) => slots[index] = Some(value),
                Err(e) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        (slots, first_error)
    })
    .map_err(|_| TGError::Worker("A worker thread panicked".to_owned()))?;

    if let Some(e) = first_error {
        return Err(e);
    }
    slots
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| TGError::Worker(format!("Missing results for {} tasks", total)))
}
