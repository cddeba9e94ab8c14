//! karaoke-pron - 노래방 곡 제목/가수 발음 및 초성 변환기
//!
//! 사용법:
//!   karaoke-pron                 표준입력의 `제목<TAB>가수` 줄마다 JSON 레코드 한 줄 출력
//!   karaoke-pron --field TEXT    TEXT 하나의 상세 변환 결과를 JSON으로 출력

use std::io::{self, BufRead, Write};

use karaoke_pron::config::load_config;
use karaoke_pron::{NoReading, Normalizer, ReadingProvider};

const USAGE: &str = "사용법: karaoke-pron [--field TEXT]";

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let code = if config.kana_reader {
        run(&Normalizer::new().with_config(config), &args)
    } else {
        run(&Normalizer::with_reader(NoReading).with_config(config), &args)
    };
    std::process::exit(code);
}

fn run<R: ReadingProvider>(normalizer: &Normalizer<R>, args: &[String]) -> i32 {
    match args {
        [] => process_stdin(normalizer),
        [flag, text] if flag == "--field" => print_field(normalizer, text),
        [flag] if flag == "--help" || flag == "-h" => {
            println!("{}", USAGE);
            0
        }
        _ => {
            eprintln!("{}", USAGE);
            2
        }
    }
}

fn print_field<R: ReadingProvider>(normalizer: &Normalizer<R>, text: &str) -> i32 {
    let result = normalizer.convert(text);
    match serde_json::to_string_pretty(&result) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            log::error!("결과 직렬화 실패: {}", e);
            1
        }
    }
}

fn process_stdin<R: ReadingProvider>(normalizer: &Normalizer<R>) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut converted = 0usize;

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                // 잘못된 UTF-8 등은 해당 줄만 건너뜀
                log::warn!("{}번째 줄 읽기 실패: {}", line_no + 1, e);
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let (title, singer) = match line.split_once('\t') {
            Some((title, singer)) => (Some(title), Some(singer)),
            None => (Some(line.as_str()), None),
        };
        let record = normalizer.song_record(title, singer);

        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                log::error!("{}번째 줄 직렬화 실패: {}", line_no + 1, e);
                continue;
            }
        };
        if let Err(e) = writeln!(out, "{}", json) {
            log::error!("출력 실패: {}", e);
            return 1;
        }
        converted += 1;
    }

    log::info!("레코드 {}개 변환 완료", converted);
    0
}
