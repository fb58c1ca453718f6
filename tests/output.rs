use satzbau::{Format, write_entries, write_sentences};
use satzbau_synth::{Scripted, SentenceKind, generate_many};
use satzbau_types::GeneratedSentence;

fn render<F>(write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut out = Vec::new();
    write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn sentences_as_csv_quote_commas() {
    let sentences = vec![
        GeneratedSentence {
            source: "He laughs.".into(),
            target: "Er lacht.".into(),
        },
        GeneratedSentence {
            source: "I think that you see the dog.".into(),
            target: "Ich denke, dass du den Hund siehst.".into(),
        },
    ];
    let text = render(|out| write_sentences(out, &sentences, Format::Csv));
    assert_eq!(
        text,
        "He laughs.,Er lacht.\n\
         I think that you see the dog.,\"Ich denke, dass du den Hund siehst.\"\n"
    );
}

#[test]
fn sentences_as_table_align_second_column() {
    let entries = satzbau_vocab::parse("attack,der Angriff\n");
    // default verb; I, definite, attack; then they, indefinite, attack
    let mut rng = Scripted::new(vec![0, 0, 0, 6, 1, 0]);
    let sentences = generate_many(SentenceKind::Accusative, &entries, 2, &mut rng);
    let text = render(|out| write_sentences(out, &sentences, Format::Table));
    assert_eq!(
        text,
        "I see the attack.    Ich sehe den Angriff.\n\
         They see an attack.  Sie sehen einen Angriff.\n"
    );
}

#[test]
fn entries_list_every_field() {
    let entries = satzbau_vocab::parse(
        "en,de,plural,abstract\n\
         idea,die Idee,die Ideen,1\n\
         \"good, well\",gut,,0\n",
    );
    let text = render(|out| write_entries(out, &entries, Format::Csv));
    assert_eq!(
        text,
        "idea,Idee,Ideen,feminine,abstract\n\
         good,gut,,,\n\
         well,gut,,,\n"
    );
}
