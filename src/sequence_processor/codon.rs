//! Codon table used by the translate stage.

/// NCBI translation table 1, indexed by `16 * first + 4 * second + third`
/// over the base order T, C, A, G.
const STANDARD_AMINO_ACIDS: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

pub const STOP: u8 = b'*';
pub const UNKNOWN: u8 = b'X';

#[derive(Debug, Clone)]
pub struct CodonTable {
    amino_acids: &'static [u8; 64],
}

impl CodonTable {
    pub fn standard() -> Self {
        Self {
            amino_acids: STANDARD_AMINO_ACIDS,
        }
    }

    /// Translate one codon. `U` reads as `T`; IUPAC ambiguity codes resolve
    /// when every expansion encodes the same amino acid, otherwise `X`.
    pub fn translate_codon(&self, codon: &[u8]) -> u8 {
        if codon.iter().all(|&b| b == b'-') {
            return b'-';
        }
        let mut resolved = None;
        for &first in expand(codon[0]) {
            for &second in expand(codon[1]) {
                for &third in expand(codon[2]) {
                    let aa = self.amino_acids[16 * first + 4 * second + third];
                    match resolved {
                        None => resolved = Some(aa),
                        Some(previous) if previous != aa => return UNKNOWN,
                        _ => {}
                    }
                }
            }
        }
        resolved.unwrap_or(UNKNOWN)
    }

    /// Translate a nucleotide sequence codon by codon, ignoring a trailing
    /// partial codon. With `to_stop` the protein ends before the first stop.
    pub fn translate(&self, residues: &[u8], to_stop: bool) -> Vec<u8> {
        let mut protein = Vec::with_capacity(residues.len() / 3);
        for codon in residues.chunks_exact(3) {
            let aa = self.translate_codon(codon);
            if to_stop && aa == STOP {
                break;
            }
            protein.push(aa);
        }
        protein
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Table indices (T, C, A, G order) a nucleotide symbol may stand for.
fn expand(base: u8) -> &'static [usize] {
    match base.to_ascii_uppercase() {
        b'T' | b'U' => &[0],
        b'C' => &[1],
        b'A' => &[2],
        b'G' => &[3],
        b'Y' => &[0, 1],
        b'R' => &[2, 3],
        b'W' => &[0, 2],
        b'S' => &[1, 3],
        b'K' => &[0, 3],
        b'M' => &[1, 2],
        b'B' => &[0, 1, 3],
        b'D' => &[0, 2, 3],
        b'H' => &[0, 1, 2],
        b'V' => &[1, 2, 3],
        b'N' => &[0, 1, 2, 3],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_layout() {
        let table = CodonTable::standard();
        assert_eq!(table.translate_codon(b"ATG"), b'M');
        assert_eq!(table.translate_codon(b"TGG"), b'W');
        assert_eq!(table.translate_codon(b"TAA"), STOP);
        assert_eq!(table.translate_codon(b"GGC"), b'G');
    }

    #[test]
    fn test_rna_and_lowercase() {
        let table = CodonTable::standard();
        assert_eq!(table.translate_codon(b"aug"), b'M');
        assert_eq!(table.translate_codon(b"UUU"), b'F');
    }

    #[test]
    fn test_ambiguity_codes() {
        let table = CodonTable::standard();
        assert_eq!(table.translate_codon(b"CTN"), b'L');
        assert_eq!(table.translate_codon(b"NNN"), UNKNOWN);
        assert_eq!(table.translate_codon(b"---"), b'-');
        assert_eq!(table.translate_codon(b"A-G"), UNKNOWN);
    }

    #[test]
    fn test_translate_to_stop() {
        let table = CodonTable::standard();
        assert_eq!(table.translate(b"ATGGCCTAAGGG", false), b"MA*G".to_vec());
        assert_eq!(table.translate(b"ATGGCCTAAGGG", true), b"MA".to_vec());
        assert_eq!(table.translate(b"ATGGC", false), b"M".to_vec());
    }
}
