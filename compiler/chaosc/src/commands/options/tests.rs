use pretty_assertions::assert_eq;

use super::*;

fn parse(args: &[&str]) -> LexOptions {
    let args: Vec<String> = args.iter().map(|s| (*s).to_owned()).collect();
    parse_lex_options(&args)
}

#[test]
fn defaults_without_flags() {
    let options = parse(&[]);
    assert_eq!(options.config.hash_seed, 0);
    assert_eq!(options.config.table_order, chaos_ir::DEFAULT_TABLE_ORDER);
    assert!(!options.stats);
}

#[test]
fn seed_accepts_decimal_and_hex() {
    assert_eq!(parse(&["--seed=17"]).config.hash_seed, 17);
    assert_eq!(parse(&["--seed=0x9E3779B9"]).config.hash_seed, 0x9E37_79B9);
}

#[test]
fn bad_seed_is_ignored() {
    assert_eq!(parse(&["--seed=banana"]).config.hash_seed, 0);
}

#[test]
fn table_order_is_bounded() {
    assert_eq!(parse(&["--table-order=10"]).config.table_order, 10);
    assert_eq!(
        parse(&["--table-order=40"]).config.table_order,
        chaos_ir::DEFAULT_TABLE_ORDER
    );
}

#[test]
fn table_order_above_maximum_keeps_default() {
    let max = chaos_ir::MAX_TABLE_ORDER;
    assert_eq!(
        parse(&[format!("--table-order={max}").as_str()]).config.table_order,
        max
    );
    for order in [max + 1, 31] {
        assert_eq!(
            parse(&[format!("--table-order={order}").as_str()]).config.table_order,
            chaos_ir::DEFAULT_TABLE_ORDER
        );
    }
}

#[test]
fn hasher_by_short_name() {
    let fx = parse(&["--hasher=fx"]).config.hasher;
    assert_eq!(fx(b"key", 1), fx_hash(b"key", 1));
    let xx = parse(&["--hasher=xx"]).config.hasher;
    assert_eq!(xx(b"key", 1), xxhash32(b"key", 1));
}

#[test]
fn unknown_hasher_keeps_default() {
    let hasher = parse(&["--hasher=md5"]).config.hasher;
    assert_eq!(hasher(b"key", 0), xxhash32(b"key", 0));
}

#[test]
fn stats_flag() {
    assert!(parse(&["--stats"]).stats);
}

#[test]
fn flags_combine() {
    let options = parse(&["--stats", "--seed=3", "--table-order=2", "--bogus"]);
    assert!(options.stats);
    assert_eq!(options.config.hash_seed, 3);
    assert_eq!(options.config.table_order, 2);
}
