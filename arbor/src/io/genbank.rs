use std::fs::File;
use std::io::{
    BufReader,
    Read,
};
use std::path::Path;

use gb_io::reader::SeqReader;
use gb_io::seq::{
    Feature as GbFeature,
    Location,
    LocationError,
    Seq,
};
use log::{
    debug,
    trace,
};

use crate::data_structs::annotation::{
    AnnotatedFeature,
    AnnotatedRecord,
    FeatureKind,
};
use crate::data_structs::coords::Interval;
use crate::error::ArborError;

/// Anything yielding annotated records in source order.
pub trait AnnotationSource: Iterator<Item = anyhow::Result<AnnotatedRecord>> {}

impl<T> AnnotationSource for T where T: Iterator<Item = anyhow::Result<AnnotatedRecord>> {}

/// Reads GenBank flat-file records and converts them to
/// [`AnnotatedRecord`]s.
pub struct GenbankReader<R: Read> {
    inner:        SeqReader<R>,
    origin:       String,
    records_read: usize,
}

impl GenbankReader<BufReader<File>> {
    /// Opens a GenBank file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            ArborError::Input {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self::new(
            BufReader::new(file),
            path.display().to_string(),
        ))
    }
}

impl<R: Read> GenbankReader<R> {
    /// Wraps a reader. `origin` names the input in error messages.
    pub fn new<S: Into<String>>(
        reader: R,
        origin: S,
    ) -> Self {
        Self {
            inner:        SeqReader::new(reader),
            origin:       origin.into(),
            records_read: 0,
        }
    }

    pub fn records_read(&self) -> usize {
        self.records_read
    }

    fn malformed<M: ToString>(
        &self,
        message: M,
    ) -> ArborError {
        ArborError::MalformedRecord {
            origin:  self.origin.clone(),
            message: message.to_string(),
        }
    }

    fn convert_seq(
        &self,
        seq: Seq,
    ) -> anyhow::Result<AnnotatedRecord> {
        let name = seq
            .name
            .clone()
            .unwrap_or_else(|| format!("{}#{}", self.origin, self.records_read));
        let features = seq
            .features
            .iter()
            .map(|feature| {
                convert_feature(feature)
                    .map_err(|e| self.malformed(format!("record {}: {}", name, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        trace!("Converted record {} with {} features", name, features.len());
        Ok(AnnotatedRecord::new(name, features))
    }
}

impl<R: Read> Iterator for GenbankReader<R> {
    type Item = anyhow::Result<AnnotatedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next();
        match next {
            None => {
                debug!("Read {} records from {}", self.records_read, self.origin);
                None
            },
            Some(Err(e)) => Some(Err(self.malformed(format!("{:?}", e)).into())),
            Some(Ok(seq)) => {
                let record = self.convert_seq(seq);
                self.records_read += 1;
                Some(record)
            },
        }
    }
}

/// Smallest start and largest end over all parts of a location.
///
/// Parts of a `join` spanning the origin of a circular record are listed
/// out of coordinate order (`join(2901..3000,1..200)`), so the first and
/// last part do not give the outer bounds.
pub(crate) fn outer_bounds(location: &Location) -> Result<(i64, i64), LocationError> {
    match location {
        Location::Complement(inner) => outer_bounds(inner),
        Location::Join(parts) | Location::Order(parts) => {
            let mut bounds: Option<(i64, i64)> = None;
            for part in parts {
                let (start, end) = outer_bounds(part)?;
                bounds = Some(match bounds {
                    Some((min_start, max_end)) => (min_start.min(start), max_end.max(end)),
                    None => (start, end),
                });
            }
            bounds.ok_or(LocationError::Empty)
        },
        other => other.find_bounds(),
    }
}

/// Converts one parsed GenBank feature. Compound locations collapse to their
/// outer bounds; a qualifier without a value becomes an empty string.
fn convert_feature(feature: &GbFeature) -> anyhow::Result<AnnotatedFeature> {
    let (start, end) = outer_bounds(&feature.location)
        .map_err(|e| anyhow::anyhow!("unresolvable location of {}: {:?}", feature.kind, e))?;
    let mut converted = AnnotatedFeature::new(
        FeatureKind::from(feature.kind.to_string().as_str()),
        Interval::try_new(start, end)?,
    );
    for (key, value) in feature.qualifiers.iter() {
        converted.push_qualifier(key.to_string(), value.clone().unwrap_or_default());
    }
    Ok(converted)
}
