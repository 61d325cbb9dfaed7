use std::path::{Path, PathBuf};

use docsplit_core::{Config, ManifestEntry, SplitError, check_document, split_document};

const GUIDE: &str = "\
# 面向 Python 开发者的 Kotlin 教程

[![badge](https://example.com/badge.svg)](https://example.com)

---

本教程适合 Python 开发者。

## 目录

- [Hello World](#hello-world)
- [循环](#循环)

## Hello World

第一个程序，见[编译与运行](#编译与运行)。

## 编译与运行

运行前先编译。参考 [for 循环](#for-循环) 与 [未知](#不存在)。

## 循环

### for 循环

for 循环遍历集合。

#### 区间

回到[文件读写](#文件-io)。

## 文件 I/O

读写文件。

---

这一段不会出现在任何页面。
";

fn demo_config() -> Config {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos/docsplit.toml");
    Config::read(path).unwrap()
}

fn write_guide(dir: &Path) -> PathBuf {
    let input = dir.join("README.md");
    std::fs::write(&input, GUIDE).unwrap();
    input
}

#[test]
fn splits_guide_into_linked_pages() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_guide(dir.path());
    let out = dir.path().join("out");

    let report = split_document(
        demo_config(),
        &input,
        &out,
        Path::new("kotlinlang.org.yaml"),
    )
    .unwrap();

    let names: Vec<String> = report
        .pages
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "00-introduction.md",
            "01-hello-world.md",
            "02-compiling-and-running.md",
            "03-loops.md",
            "04-file-io.md",
        ]
    );

    let intro = std::fs::read_to_string(out.join("00-introduction.md")).unwrap();
    assert!(intro.starts_with("*本资料英文原文的作者是"));
    assert!(intro.contains("遵循相同授权方式。*\n\n---\n\n本教程适合 Python 开发者。\n"));
    assert!(intro.contains("## 目录\n"));
    assert!(intro.contains("- [Hello World](hello-world.html)\n"));
    assert!(intro.contains("- [循环](loops.html)\n"));
    assert!(intro.ends_with("\n\n---\n\n[下一节：Hello World →](hello-world.html)\n"));

    let compiling = std::fs::read_to_string(out.join("02-compiling-and-running.md")).unwrap();
    assert!(compiling.starts_with("运行前先编译。"));
    assert!(compiling.contains("[for 循环](loops.html#for-循环)"));
    assert!(compiling.contains("[未知](#不存在)"));
    assert!(compiling.contains(
        "[← 上一节：Hello World](hello-world.html) | [下一节：循环 →](loops.html)"
    ));
    assert!(compiling.ends_with("(https://github.com/Yue-plus) 翻译，遵循相同授权方式。*"));

    let loops = std::fs::read_to_string(out.join("03-loops.md")).unwrap();
    assert!(loops.starts_with("## for 循环\n\nfor 循环遍历集合。\n\n### 区间\n"));
    assert!(loops.contains("回到[文件读写](file-io.html)。"));

    let last = std::fs::read_to_string(out.join("04-file-io.md")).unwrap();
    assert!(!last.contains("不会出现"));
    assert!(!last.contains("下一节"));

    assert_eq!(report.unresolved.len(), 1);
    assert_eq!(report.unresolved[0].section, "编译与运行");
    assert_eq!(report.unresolved[0].target, "不存在");

    let manifest = std::fs::read_to_string(out.join("kotlinlang.org.yaml")).unwrap();
    let entries: Vec<ManifestEntry> = serde_yaml::from_str(&manifest).unwrap();
    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["简介", "Hello World", "编译与运行", "循环", "文件 I/O"]);
    assert_eq!(entries[3].md, "03-loops.md");
    assert_eq!(entries[3].url, "loops.html");
}

#[test]
fn check_flags_unmapped_sections() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("README.md");
    std::fs::write(&input, "---\nintro\n## 字符串\n## 新章节\n[x](#字符串)\n").unwrap();

    let report = check_document(demo_config(), &input).unwrap();

    assert_eq!(report.pages.len(), 3);
    assert_eq!(report.pages[1].file.as_deref(), Some("01-strings.md"));
    assert_eq!(report.missing, vec!["新章节".to_string()]);
    assert!(report.unresolved.is_empty());
    assert!(!dir.path().join("00-introduction.md").exists());
}

#[test]
fn unmapped_section_aborts_split() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("README.md");
    std::fs::write(&input, "---\nintro\n## 新章节\ntext\n").unwrap();

    let err = split_document(demo_config(), &input, dir.path(), Path::new("toc.yaml"))
        .unwrap_err();

    assert!(matches!(err, SplitError::MissingFilename { ref slug } if slug == "新章节"));
    assert!(err.to_string().contains("[filenames.stems]"));
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = check_document(Config::default(), &dir.path().join("nope.md")).unwrap_err();
    assert!(matches!(err, SplitError::Io(_)));
}
