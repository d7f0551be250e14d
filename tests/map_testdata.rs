// ============================================================================
// 基于 testdata 的线路图回归测试
//
// 说明：
// - testdata 文件格式：
//   - 前半部分：可选配置行（例如 validateInput=false、maxSteps=3），随后是线路图
//   - 分隔符：一行 `---`
//   - 后半部分：期望结果，`path=...` + `word=...`，或者 `error=<Kind>`
// - 线路图的行首空白决定列坐标，必须原样保留
// - 额外支持黄金文件更新模式：
//   - 当设置环境变量 `UPDATE_GOLDEN=1` 时，不做 assert，而是把当前结果写回 testdata 文件
//   - 更新完成后会 panic 提示你重新运行测试
// ============================================================================

use ascii_pathfinder_rs::{WalkOptions, find_path_in_text};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 是否启用“自动更新 golden 文件”模式。
fn should_update_golden() -> bool {
    std::env::var("UPDATE_GOLDEN")
        .is_ok_and(|value| value == "1" || value.eq_ignore_ascii_case("true"))
}

/// 用新的期望结果重写 golden 文件内容（保留线路图与分隔符 `---`）。
fn rewrite_golden_file_content(raw: &str, new_expected: &str) -> String {
    let raw = raw.replace("\r\n", "\n");

    let mut out = String::new();
    let mut found_delimiter = false;

    for line in raw.split('\n') {
        out.push_str(line);
        out.push('\n');

        if line == "---" {
            found_delimiter = true;
            break;
        }
    }

    if !found_delimiter {
        panic!("golden 文件缺少分隔符 `---`，无法更新");
    }

    out.push_str(new_expected);
    out.push('\n');

    out
}

fn collect_txt_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().and_then(|s| s.to_str()) == Some("txt"))
        .map(|entry| entry.path().to_path_buf())
        .collect();

    // 稳定排序，保证失败时输出可复现
    files.sort();
    files
}

/// 解析一个 golden file，返回 (线路图, 选项, 期望结果)。
fn parse_test_case(content: &str) -> (String, WalkOptions, String) {
    let content = content.replace("\r\n", "\n");

    let mut options = WalkOptions::default();
    let mut in_map = true;
    let mut map_started = false;
    let mut map_lines: Vec<&str> = Vec::new();
    let mut expected_lines: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        if line == "---" {
            in_map = false;
            continue;
        }

        if in_map {
            // 线路图开始之前：解析配置行（线路图本身不可能包含 `=`）
            if !map_started {
                if let Some((key, value)) = line.trim().split_once('=') {
                    let value = value.trim();
                    match key.trim() {
                        "validateInput" => {
                            options.validate_input = Some(value.parse::<bool>().unwrap_or_else(
                                |err| panic!("validateInput 解析失败: value={value}, err={err}"),
                            ));
                        }
                        "maxSteps" => {
                            options.max_steps = Some(value.parse::<usize>().unwrap_or_else(
                                |err| panic!("maxSteps 解析失败: value={value}, err={err}"),
                            ));
                        }
                        other => panic!("未知配置项: {other}"),
                    }
                    continue;
                }
            }

            map_started = true;
            map_lines.push(line);
        } else if !line.trim().is_empty() {
            expected_lines.push(line.trim_end());
        }
    }

    (map_lines.join("\n"), options, expected_lines.join("\n"))
}

fn render_outcome(map: &str, options: &WalkOptions) -> String {
    match find_path_in_text(map, options) {
        Ok(result) => format!("path={}\nword={}", result.path, result.word),
        Err(err) => format!("error={}", err.kind()),
    }
}

#[test]
fn map_testdata_matches_expectations() {
    let dir = Path::new("tests/testdata/maps");
    let update_golden = should_update_golden();
    let mut updated_files: Vec<PathBuf> = Vec::new();

    let files = collect_txt_files(dir);
    assert!(!files.is_empty(), "testdata 目录为空: {dir:?}");

    for file_path in files {
        let raw = fs::read_to_string(&file_path)
            .unwrap_or_else(|err| panic!("读取 testdata 失败: path={file_path:?}, err={err}"));

        let (map, options, expected) = parse_test_case(&raw);
        let actual = render_outcome(&map, &options);

        if actual != expected {
            if update_golden {
                let new_content = rewrite_golden_file_content(&raw, &actual);
                fs::write(&file_path, new_content).unwrap_or_else(|err| {
                    panic!("写入 golden 失败: path={file_path:?}, err={err}");
                });
                updated_files.push(file_path);
                continue;
            }

            assert_eq!(actual, expected, "结果不一致: path={file_path:?}");
        }
    }

    if update_golden && !updated_files.is_empty() {
        let mut message = format!(
            "已更新 {} 个 golden 文件。请重新运行测试确认结果稳定：\n",
            updated_files.len()
        );
        for path in updated_files {
            message.push_str(&format!("  - {path:?}\n"));
        }
        panic!("{message}");
    }
}
