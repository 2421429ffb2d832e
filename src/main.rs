//! Koyin - 중국어 학습용 병음 한글 표기 / 하루 학습 루틴 도구

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use koyin::config::{load_config, load_config_from, KoyinConfig};
use koyin::pinyin::{PinyinTranscriber, SyllableTable};
use koyin::routine::{build_routine, collect_recent_ids, RoutinePools, StudyItem, StudyRecord};

#[derive(Parser, Debug)]
#[command(name = "koyin")]
#[command(about = "Pinyin to Hangul hints and daily study routines")]
#[command(version)]
struct Args {
    /// 음절 테이블 JSON (설정의 table_path보다 우선)
    #[arg(long, env = "KOYIN_TABLE")]
    table: Option<String>,

    /// 설정 파일 경로
    #[arg(long, env = "KOYIN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 자유 텍스트 병음을 한글 발음으로
    Pinyin {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// 음절 단위로 나뉜 병음을 한글 발음으로
    Syllables {
        #[arg(required = true)]
        syllables: Vec<String>,
    },
    /// 오늘의 학습 계획을 JSON으로 출력
    Routine {
        /// 분류별 항목 풀 JSON
        #[arg(long)]
        pools: PathBuf,
        /// 학습 기록 JSON 배열
        #[arg(long)]
        history: Option<PathBuf>,
        /// 기준 날짜 (YYYY-MM-DD, 기본: 오늘)
        #[arg(long)]
        today: Option<NaiveDate>,
        #[arg(long)]
        words: Option<usize>,
        #[arg(long)]
        sentences: Option<usize>,
        #[arg(long)]
        grammar: Option<usize>,
        #[arg(long)]
        dialogs: Option<usize>,
    },
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    match run(args, config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("오류: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, config: KoyinConfig) -> Result<String, String> {
    match args.command {
        Command::Pinyin { text } => {
            let transcriber = load_transcriber(args.table.as_deref(), &config)?;
            Ok(transcriber.free_text_to_korean(&text.join(" ")))
        }
        Command::Syllables { syllables } => {
            let transcriber = load_transcriber(args.table.as_deref(), &config)?;
            Ok(transcriber.syllables_to_korean(&syllables))
        }
        Command::Routine {
            pools,
            history,
            today,
            words,
            sentences,
            grammar,
            dialogs,
        } => {
            let pools: RoutinePools<StudyItem> = read_json(&pools)?;
            let records: Vec<StudyRecord> = match history {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let recent_ids = collect_recent_ids(&records, today, &config.history_policy());

            let mut counts = config.routine;
            counts.word_count = words.unwrap_or(counts.word_count);
            counts.sentence_count = sentences.unwrap_or(counts.sentence_count);
            counts.grammar_count = grammar.unwrap_or(counts.grammar_count);
            counts.dialog_count = dialogs.unwrap_or(counts.dialog_count);

            let plan = build_routine(&pools, &recent_ids, &counts);
            serde_json::to_string_pretty(&plan).map_err(|e| format!("직렬화 실패: {}", e))
        }
    }
}

/// 음절 테이블 선택: 인자 > 설정 > 내장
fn load_transcriber(table: Option<&str>, config: &KoyinConfig) -> Result<PinyinTranscriber, String> {
    match table.or(config.table_path.as_deref()) {
        Some(path) => SyllableTable::load(path)
            .map(PinyinTranscriber::new)
            .map_err(|e| format!("음절 테이블 로드 실패 ({}): {}", path, e)),
        None => Ok(PinyinTranscriber::builtin()),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("파일 읽기 실패 ({}): {}", path.display(), e))?;
    serde_json::from_str(&content).map_err(|e| format!("JSON 파싱 실패 ({}): {}", path.display(), e))
}
