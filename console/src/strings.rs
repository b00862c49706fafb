macro_rules! define_strings {
    (
        $($name:ident = $value:literal);*$(;)?
    ) => {
        $(
            pub const $name: &str = $value;
        )*
    };
}

pub mod analyze {
    define_strings! {
        FILES =
            "Annotation files in GenBank flat-file format. Wildcards are \
            expanded. Overrides the input files of the config file; when \
            neither is given the built-in genome pair is read.";
        CONFIG =
            "JSON config file. Recognized keys: reference_ids, input_files, \
            min_length, bucket_threshold, proximity_threshold. Missing keys \
            keep their defaults.";
        REFERENCE =
            "Reference protein identifier. Must be given exactly twice; the \
            first value is the first reference.";
        MIN_LENGTH =
            "Proteins must be strictly longer than this many residues to count \
            as a bucket or proximity match.";
        BUCKET_THRESHOLD =
            "Upper bound (exclusive) of the L1 composition distance to either \
            reference for a bucket match. A distance of exactly zero never \
            matches.";
        PROXIMITY_THRESHOLD =
            "Upper bound (exclusive) of the distance to the nearest repeat \
            region for a proximity match.";
    }
}

pub mod utils {
    define_strings! {
        VERBOSE =
            "Increase logging verbosity (-v info, -vv debug, -vvv trace). \
            Ignored when RUST_LOG is set.";
        PROGRESS =
            "Display a progress bar while reading annotation files.";
    }
}
