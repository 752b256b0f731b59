//! Wheatstone cryptograph demonstration
//!
//! A text with many repeated passages is encrypted with a Wheatstone
//! disk. The repeats survive as isomorphs: ciphertext passages whose
//! symbols differ but whose internal repeat-distance shape is identical.
//! With the plaintext known, each finding can be checked by eye.

use isoglyph_api::{ConfigBuilder, IsomorphScanner};

const PLAINTEXT: &str = concat!(
    "ribonucleic_acid_strands_are_created_using_deoxyri",
    "bonucleic_acid_strands_as_a_template_in_a_procesq_",
    "calqed_transcription_where_deoxyribonucleic_acid_b",
    "ases_are_exchanged_for_their_corqesponding_bases_e",
    "xcept_in_the_case_of_thymine_for_which_ribonucleic",
    "_acid_substitutes_uracil_under_the_genetic_code_th",
    "ese_ribonucleic_acid_strands_specify_the_sequence_",
    "of_amino_acids_within_proteins_in_a_procesq_calqed",
    "_translation",
);

// Encrypted with the key:
//   plain ring : _abcdefghijklmnopqrstuvwxyz / start pos. 5 (e)
//   cipher ring: otzvfxmbliajcqwnskheypgurd  / start pos. 2 (z)
const CIPHERTEXT: &str = concat!(
    "nbtwwpfqbjmfxbqimdodigqzajzscnfhnlyykcjzbtpdoaeywm",
    "oqqyvcmaxvfmclxrdrlpctiazajjxkdzdnlysdfkhhlaludqcg",
    "driwvvoyevspmpqyrwyybfswtnjnsoiafgsvvaezgopeygzrpu",
    "unzsrdsfoxrfivsaiimcprbtswhtaqdzzkxvvvydfrhyycdqpo",
    "edtcsumjrhbxtfvplfejmonmphunjkovcipgkgnbdemmqgxdvr",
    "gudxtrketheiyppbpvrgmlwkmtpcqoivhscehtelrekymgueqz",
    "owtunbtwwpfqbjmfxbqimdodigqzavtksgyqnirghjrawdlrog",
    "jvrdjlqwotvixyzdcucqhxpupocspolkgiaaozonkxfwkstmpp",
    "hcjplqbusmcc",
);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Scanning {} ciphertext symbols for isomorphs\n", CIPHERTEXT.len());

    let config = ConfigBuilder::default().min_significance(2).build()?;
    let scanner = IsomorphScanner::with_config(config)?;
    let output = scanner.scan_text(CIPHERTEXT)?;

    for isomorph in &output.isomorphs {
        println!(
            "pattern {} (length = {}, significance = {}) at {} positions:",
            isomorph.canonical,
            isomorph.length,
            isomorph.significance,
            isomorph.positions.len()
        );
        for &position in &isomorph.positions {
            let end = position + isomorph.length;
            println!(
                "{position:>6}: {} | {}",
                &CIPHERTEXT[position..end],
                &PLAINTEXT[position..end]
            );
        }
        println!();
    }

    println!(
        "{} isomorphs across {} window lengths in {} ms",
        output.metadata.patterns_found,
        output.metadata.lengths_scanned,
        output.metadata.processing_time_ms
    );
    println!(
        "\nA significance of 2 does not reliably indicate identical plaintext \
         passages; the high-significance findings are the trustworthy ones."
    );
    Ok(())
}
