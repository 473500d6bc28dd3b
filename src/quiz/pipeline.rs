//! End-to-end generation pipeline
//!
//! One batch run: segment the corpus, extract a record per span, emit the
//! generated source. Strictly single-threaded and synchronous; the result is
//! a pure function of the input text and the emit options.
//!
//! A record whose extraction fails is skipped with a diagnostic naming its
//! ordinal; the remaining records still generate. Partial success is expected
//! behavior, not an error.

use crate::quiz::emitting::{emit, EmitOptions};
use crate::quiz::extracting::extract;
use crate::quiz::record::Record;
use crate::quiz::segmenting::{SegmentError, SegmentedCorpus};

/// Records recovered from one corpus, plus skip diagnostics
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub records: Vec<Record>,
    pub diagnostics: Vec<String>,
}

/// A finished generation run
#[derive(Debug, Clone)]
pub struct Generated {
    /// The generated source text, header/footer included
    pub source: String,
    /// How many records made it into the output
    pub record_count: usize,
    /// One entry per skipped record
    pub diagnostics: Vec<String>,
}

/// Batch driver tying segmentation, extraction and emission together
pub struct Generator {
    opts: EmitOptions,
}

impl Generator {
    pub fn new(opts: EmitOptions) -> Self {
        Generator { opts }
    }

    /// Segment and extract, skipping unparseable records
    pub fn parse(source: &str) -> Result<ParseOutcome, SegmentError> {
        let corpus = SegmentedCorpus::segment(source)?;

        let mut records = Vec::with_capacity(corpus.spans().len());
        let mut diagnostics = Vec::new();
        for span in corpus.spans() {
            match extract(&corpus, span) {
                Ok(record) => records.push(record),
                Err(err) => diagnostics.push(format!(
                    "skipping record {} (line {}): {}",
                    span.ordinal,
                    span.start + 1,
                    err
                )),
            }
        }

        Ok(ParseOutcome {
            records,
            diagnostics,
        })
    }

    /// Run the full pipeline and render the generated source
    pub fn generate(&self, source: &str) -> Result<Generated, SegmentError> {
        let outcome = Self::parse(source)?;
        let rendered = emit(&outcome.records, &self.opts);
        Ok(Generated {
            source: rendered,
            record_count: outcome.records.len(),
            diagnostics: outcome.diagnostics,
        })
    }
}
