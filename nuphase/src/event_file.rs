use std::{fs::File, io::Write, path::Path};

use nuphase_driver::firmware::SystemEvent;

use crate::error::NuphaseError;

/// Writes `event` as tab-separated text.
///
/// There is no header. Row `i` holds sample `i` of every master channel followed by
/// sample `i` of every slave channel, each value followed by a tab.
pub fn write_event<W: Write>(writer: W, event: &SystemEvent) -> Result<(), NuphaseError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    (0..event.num_samples()).try_for_each(|i| {
        wtr.write_record(
            event
                .waveforms()
                .filter_map(|wf| wf.samples().get(i))
                .map(u8::to_string)
                .chain(std::iter::once(String::new())),
        )
    })?;
    wtr.flush()?;
    Ok(())
}

/// Writes `event` to the file at `path`, replacing its content.
pub fn save_event(path: impl AsRef<Path>, event: &SystemEvent) -> Result<(), NuphaseError> {
    let path = path.as_ref();
    tracing::debug!(
        "Saving {} samples of {} waveforms to {}",
        event.num_samples(),
        event.waveforms().count(),
        path.display()
    );
    write_event(File::create(path)?, event)
}
