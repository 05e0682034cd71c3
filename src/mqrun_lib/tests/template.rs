use std::path::Path;

use super::render_mqpar;

#[test]
fn render_replaces_all_tokens_test() {
    let template = "<filePaths>__RAW__</filePaths>\n\
                    <fastaFilePath>__FASTA__</fastaFilePath>\n\
                    <experiment>__LABEL__</experiment>\n";

    let rendered = render_mqpar(
        template,
        Path::new("/scratch/run/sample1.raw"),
        Path::new("/data/ref.fasta"),
        "sample1",
    );

    assert_eq!(
        rendered,
        "<filePaths>/scratch/run/sample1.raw</filePaths>\n\
         <fastaFilePath>/data/ref.fasta</fastaFilePath>\n\
         <experiment>sample1</experiment>\n"
    );
}

#[test]
fn render_replaces_every_occurrence_test() {
    let template = "__LABEL__ and again __LABEL__";

    let rendered = render_mqpar(template, Path::new("r"), Path::new("f"), "x");

    assert_eq!(rendered, "x and again x");
}

#[test]
fn render_passes_other_content_through_test() {
    let template = "<maxQuantVersion>2.0.3.0</maxQuantVersion>\n<useDotNetCore>True</useDotNetCore>";

    let rendered = render_mqpar(
        template,
        Path::new("/in/a.raw"),
        Path::new("/data/ref.fasta"),
        "a",
    );

    assert_eq!(rendered, template);
}
