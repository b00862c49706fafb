#![allow(dead_code)]

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};

const BASES: [char; 4] = ['a', 'c', 'g', 't'];

const QUALIFIER_INDENT: &str = "                     ";
/// Residues per qualifier line in NCBI flat files.
const QUALIFIER_WIDTH: usize = 58;

/// Coding region of a demo record, with its location in GenBank syntax.
pub struct DemoCds {
    pub location:    String,
    pub protein_id:  Option<String>,
    pub translation: Option<String>,
}

/// Synthetic GenBank record written in NCBI flat-file layout.
pub struct DemoRecord {
    name:    String,
    length:  usize,
    repeats: Vec<(i64, i64)>,
    cds:     Vec<DemoCds>,
}

impl DemoRecord {
    pub fn new(
        name: &str,
        length: usize,
    ) -> Self {
        Self {
            name: name.to_string(),
            length,
            repeats: Vec::new(),
            cds: Vec::new(),
        }
    }

    pub fn repeat(
        mut self,
        start: i64,
        end: i64,
    ) -> Self {
        self.repeats.push((start, end));
        self
    }

    /// Adds a simple coding region. Coordinates are 0-based half-open.
    pub fn cds(
        self,
        start: i64,
        end: i64,
        protein_id: Option<&str>,
        translation: Option<String>,
    ) -> Self {
        let location = format!("{}..{}", start + 1, end);
        self.cds_at(&location, protein_id, translation)
    }

    /// Adds a coding region with a raw GenBank location such as
    /// `join(2901..3000,1..200)`.
    pub fn cds_at(
        mut self,
        location: &str,
        protein_id: Option<&str>,
        translation: Option<String>,
    ) -> Self {
        self.cds.push(DemoCds {
            location: location.to_string(),
            protein_id: protein_id.map(str::to_string),
            translation,
        });
        self
    }

    pub fn to_genbank(&self) -> String {
        let mut out = String::new();
        writeln!(
            out,
            "LOCUS       {:<16} {:>11} bp    DNA     linear   CON 01-JAN-2020",
            self.name, self.length
        )
        .unwrap();
        writeln!(out, "DEFINITION  Synthetic test record {}.", self.name).unwrap();
        writeln!(out, "ACCESSION   {}", self.name).unwrap();
        writeln!(out, "VERSION     {}.1", self.name).unwrap();
        writeln!(out, "KEYWORDS    .").unwrap();
        writeln!(out, "SOURCE      synthetic construct").unwrap();
        writeln!(out, "  ORGANISM  synthetic construct").unwrap();
        writeln!(out, "            other sequences.").unwrap();
        writeln!(out, "FEATURES             Location/Qualifiers").unwrap();
        writeln!(out, "     source          1..{}", self.length).unwrap();
        writeln!(out, "                     /mol_type=\"genomic DNA\"").unwrap();

        for (start, end) in self.repeats.iter() {
            writeln!(out, "     repeat_region   {}..{}", start + 1, end).unwrap();
            writeln!(out, "                     /rpt_family=\"demo\"").unwrap();
        }
        for cds in self.cds.iter() {
            writeln!(out, "     gene            {}", cds.location).unwrap();
            writeln!(out, "     CDS             {}", cds.location).unwrap();
            match &cds.protein_id {
                Some(id) => {
                    writeln!(out, "                     /protein_id=\"{}\"", id).unwrap();
                },
                None => {
                    writeln!(out, "                     /pseudo").unwrap();
                },
            }
            if let Some(translation) = &cds.translation {
                write_wrapped(&mut out, &format!("/translation=\"{}\"", translation));
            }
        }

        writeln!(out, "ORIGIN").unwrap();
        let sequence = (0..self.length)
            .map(|i| BASES[i % BASES.len()])
            .collect::<String>();
        for (line_idx, line) in sequence.as_bytes().chunks(60).enumerate() {
            let blocks = line
                .chunks(10)
                .map(|block| String::from_utf8_lossy(block).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "{:>9} {}", line_idx * 60 + 1, blocks).unwrap();
        }
        writeln!(out, "//").unwrap();
        out
    }
}

/// Writes a qualifier split over continuation lines of at most
/// [`QUALIFIER_WIDTH`] characters.
fn write_wrapped(
    out: &mut String,
    qualifier: &str,
) {
    for line in qualifier.as_bytes().chunks(QUALIFIER_WIDTH) {
        writeln!(out, "{}{}", QUALIFIER_INDENT, String::from_utf8_lossy(line)).unwrap();
    }
}

/// Writes `records` into `dir/name` and returns the path.
pub fn write_genbank(
    dir: &Path,
    name: &str,
    records: &[DemoRecord],
) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).expect("Failed to create GenBank file");
    for record in records {
        file.write_all(record.to_genbank().as_bytes())
            .expect("Failed to write GenBank record");
    }
    path
}

/// Protein made of runs of single residues, e.g. `[('A', 2), ('C', 1)]`
/// gives `AAC`.
pub fn protein(runs: &[(char, usize)]) -> String {
    runs.iter()
        .map(|(residue, count)| residue.to_string().repeat(*count))
        .collect()
}
