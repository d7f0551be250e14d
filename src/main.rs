use ascii_pathfinder_rs::{PathResult, PathfinderError, WalkOptions};
use std::io::{self, Read, Write};

// --------------------------------------------------------------------
// 统一处理 stdout 输出：
// 1) 始终补齐末尾换行，避免 zsh 把提示符（通常是 `%`）粘在输出后面。
// 2) pipe 场景下如果下游提前关闭（BrokenPipe），按 Unix 习惯静默退出，不 panic。
// --------------------------------------------------------------------
fn write_stdout_with_trailing_newline(text: &str) {
    fn handle_write_error(err: io::Error) -> ! {
        if err.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }

        eprintln!("写入 stdout 失败: {err}");
        std::process::exit(1);
    }

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(text.as_bytes()) {
        handle_write_error(err);
    }

    if !text.ends_with('\n') {
        if let Err(err) = stdout.write_all(b"\n") {
            handle_write_error(err);
        }
    }
}

fn print_help() {
    let bin = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let help = format!(
        r#"{bin} {version}

用法：
  # 从 stdin 读取线路图，输出 path 与 word
  {bin} < map.txt

  # 从文件读取
  {bin} map.txt

  # 输出 JSON（失败时输出 {{"error": {{"kind": ..., "message": ...}}}}）
  {bin} --json map.txt

选项：
  --json            输出 JSON
  --max-steps N     最大步数（默认 4 × 格子数 + 1）
  --no-validate     不校验输入字符（非法字符只在走到时才报错）
  -h, --help        输出帮助并退出
  -V, --version     输出版本并退出

退出码：
  0  成功
  1  线路图有缺陷，或读取输入失败
  2  用法错误
"#
    );

    write_stdout_with_trailing_newline(&help);
}

fn usage_error(message: &str) -> ! {
    let bin = env!("CARGO_PKG_NAME");
    eprintln!("{message}");
    eprintln!("提示：可以先运行 `{bin} --help` 查看完整用法。");
    std::process::exit(2);
}

/// 解析后的命令行参数。
#[derive(Debug, Default)]
struct CliArgs {
    json: bool,
    options: WalkOptions,
    file: Option<String>,
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => cli.json = true,
            "--no-validate" => cli.options.validate_input = Some(false),
            "--max-steps" => {
                let Some(value) = iter.next() else {
                    usage_error("参数错误：`--max-steps` 需要一个数值。");
                };
                cli.options.max_steps = Some(parse_max_steps(value));
            }
            other if other.starts_with("--max-steps=") => {
                let value = &other["--max-steps=".len()..];
                cli.options.max_steps = Some(parse_max_steps(value));
            }
            other if other.starts_with('-') && other != "-" => {
                usage_error(&format!("未知参数: {other}"));
            }
            path => {
                if cli.file.is_some() {
                    usage_error(&format!("只能指定一个输入文件，多余的参数: {path}"));
                }
                cli.file = Some(path.to_string());
            }
        }
    }

    cli
}

fn parse_max_steps(value: &str) -> usize {
    value.parse::<usize>().unwrap_or_else(|err| {
        usage_error(&format!("参数错误：`--max-steps` 解析失败: value={value}, err={err}"))
    })
}

fn read_input(file: Option<&str>) -> io::Result<String> {
    match file {
        Some(path) if path != "-" => std::fs::read_to_string(path),
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn render_text(result: &PathResult) -> String {
    format!("path: {}\nword: {}", result.path, result.word)
}

fn render_json_error(err: &PathfinderError) -> String {
    serde_json::json!({
        "error": {
            "kind": err.kind(),
            "message": err.to_string(),
        }
    })
    .to_string()
}

fn main() {
    env_logger::init();

    // --------------------------------------------------------------------
    // `--help/--version` 不应该依赖 stdin
    // --------------------------------------------------------------------
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return;
    }

    if args.iter().any(|arg| arg == "-V" || arg == "--version") {
        let bin = env!("CARGO_PKG_NAME");
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_with_trailing_newline(&format!("{bin} {version}"));
        return;
    }

    let cli = parse_args(&args);

    let input = match read_input(cli.file.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("读取输入失败: {err}");
            std::process::exit(1);
        }
    };

    if input.trim().is_empty() {
        usage_error("输入为空：请通过文件参数、管道或重定向提供线路图。");
    }

    match ascii_pathfinder_rs::find_path_in_text(&input, &cli.options) {
        Ok(result) => {
            if cli.json {
                match serde_json::to_string(&result) {
                    Ok(json) => write_stdout_with_trailing_newline(&json),
                    Err(err) => {
                        eprintln!("序列化结果失败: {err}");
                        std::process::exit(1);
                    }
                }
            } else {
                write_stdout_with_trailing_newline(&render_text(&result));
            }
        }
        Err(err) => {
            if cli.json {
                write_stdout_with_trailing_newline(&render_json_error(&err));
            } else {
                eprintln!("线路图无效（{}）: {err}", err.kind());
            }
            std::process::exit(1);
        }
    }
}
