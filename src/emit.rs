use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

use crate::key::KeyBytes;
use crate::seed::KeySeed;
use crate::{ARRAY_NAME, HEADER_NAME, OUTPUT_PATH};

const PER_ROW: usize = 8;

/// Renders the key as C source: the header include, then the array
/// initializer in rows of eight decimal values.
pub fn render(key: &KeyBytes) -> String {
    let rows: String = key
        .as_bytes()
        .chunks(PER_ROW)
        .map(|row| {
            let values: String = row.iter().map(|b| format!("{b}, ")).collect();
            format!("    {values}\n")
        })
        .collect();

    format!("#include \"{HEADER_NAME}\"\n\nconst unsigned char {ARRAY_NAME}[] = {{\n{rows}}};\n")
}

/// Generates a key and truncate-writes it to [`OUTPUT_PATH`].
pub fn emit(seed: Option<&KeySeed>) -> io::Result<()> {
    emit_to(OUTPUT_PATH, seed)
}

/// Same as [`emit`] with an explicit destination.
///
/// The parent directory must already exist; nothing is created besides the
/// file itself, and any previous contents are discarded.
pub fn emit_to(path: impl AsRef<Path>, seed: Option<&KeySeed>) -> io::Result<()> {
    let path = path.as_ref();

    if let Some(seed) = seed {
        info!("Using seed {}", seed);
    }

    let key = KeyBytes::from_seed(seed);
    debug!("Generated key {}", key.to_hex());

    fs::write(path, render(&key))?;

    info!("Key written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KEY_LEN;

    #[test]
    fn render_layout() {
        let bytes: [u8; KEY_LEN] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 255];
        let text = render(&KeyBytes::from(bytes));
        assert_eq!(
            text,
            "#include \"secret.h\"\n\
             \n\
             const unsigned char SECRET_KEY[] = {\n    \
             0, 1, 2, 3, 4, 5, 6, 7, \n    \
             8, 9, 10, 11, 12, 13, 14, 255, \n\
             };\n"
        );
    }

    #[test]
    fn render_has_two_rows_of_eight() {
        let text = render(&KeyBytes::from([200; KEY_LEN]));
        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("    ")).collect();
        assert_eq!(rows.len(), 2);
        for row in rows {
            assert_eq!(row.matches(", ").count(), PER_ROW);
        }
    }
}
