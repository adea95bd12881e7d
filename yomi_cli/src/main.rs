use std::{
    env,
    io::{self, Write},
};

use yomi_core::labeler::Labeler;
use yomi_core::model::Labeling;
use yomi_core::tokenizer::{ReadingSetTokenizer, Tokenizer};
use yomi_kana::{KanaTokenizer, is_kana_reading, normalize_reading};

fn main() -> io::Result<()> {
    let use_kana = parse_args();
    let tokenizer: Box<dyn Tokenizer> = if use_kana {
        Box::new(KanaTokenizer)
    } else {
        Box::new(ReadingSetTokenizer)
    };
    let labeler = Labeler::new(tokenizer);
    repl(&labeler, use_kana)
}

fn parse_args() -> bool {
    let mut use_kana = false;
    for a in env::args().skip(1) {
        if a == "--kana" {
            use_kana = true;
        }
        if a == "--help" || a == "-h" {
            print_help();
        }
    }
    use_kana
}

fn print_help() -> ! {
    println!(
        "用法：yomi_cli [--kana]\n交互：每行输入「短语 读音」（空格分隔），回车后列出所有标注；输入 :q 退出\n--kana：按文字系统（是否假名）分类，替代默认的“读音字符集”分类"
    );
    std::process::exit(0);
}

fn repl(labeler: &Labeler<Box<dyn Tokenizer>>, use_kana: bool) -> io::Result<()> {
    let mut out = io::stdout();
    let mut line = String::new();
    let mode = if use_kana { "kana" } else { "reading-set" };
    writeln!(out, "yomi-rs demo (注音标注 CLI, std-only) | tokenizer: {mode}")?;
    writeln!(out, "输入「短语 读音」后回车。输入 :q 退出。")?;
    (&mut out).flush()?;

    loop {
        (&mut line).clear();
        print!("phrase reading>");
        out.flush()?;
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == ":q" || input == ":quit" || input == ":exit" {
            break;
        }
        println!("--------------------");
        println!("input:{input}");

        let mut it = input.split_whitespace();
        let (Some(phrase), Some(reading)) = (it.next(), it.next()) else {
            writeln!(out, "(需要「短语 读音」两列，以空格分隔)")?;
            continue;
        };

        // 片假名读音折叠为平假名；非假名读音只提示，不拒绝（结果照常是数据）。
        let reading = if is_kana_reading(reading) {
            let normalized = normalize_reading(reading);
            if normalized != reading {
                writeln!(out, "(读音已规整为平假名: {normalized})")?;
            }
            normalized
        } else {
            writeln!(out, "(提示：读音含非假名字符)")?;
            reading.to_string()
        };

        let tokenization = labeler.tokenize(phrase, &reading);
        writeln!(out, "pieces: {}", tokenization.pieces.join(" | "))?;

        let labelings = labeler.label(phrase, &reading);
        for (i, l) in labelings.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, format_labeling(l))?;
        }
        match labelings.len() {
            0 => writeln!(out, "(无合法对应)")?,
            1 => writeln!(out, "共 1 个标注（无歧义）")?,
            n => writeln!(out, "共 {n} 个标注（有歧义）")?,
        }
    }

    Ok(())
}

/// 标注的单行展示：`piece(读音分组)`，空格分隔。
fn format_labeling(labeling: &Labeling) -> String {
    let mut s = String::new();
    for (k, piece) in labeling.pieces.iter().enumerate() {
        if k > 0 {
            s.push(' ');
        }
        s.push_str(piece);
        s.push('(');
        s.push_str(&labeling.readings[k]);
        s.push(')');
    }
    s
}
