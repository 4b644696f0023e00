use super::*;
use crate::config::ConfigError;
use crate::tokenizer::Token;

fn budget(max_context: usize, system: usize, preamble: usize, reserve: usize) -> TokenBudget {
    TokenBudget {
        max_context_tokens: max_context,
        system_prompt_tokens: system,
        preamble_tokens: preamble,
        response_reserve_tokens: reserve,
    }
}

fn tokens(n: usize) -> Vec<Token> {
    (0..n as u32).collect()
}

#[test]
fn test_round_trip_no_loss_no_duplication() {
    let input = tokens(10_007);
    let chunks = plan_chunks(&input, 512);

    let rebuilt: Vec<Token> = chunks.iter().flat_map(|c| c.iter().copied()).collect();
    assert_eq!(rebuilt, input);
}

#[test]
fn test_every_chunk_within_capacity() {
    let input = tokens(5_000);
    let capacity = 700;
    for chunk in plan_chunks(&input, capacity) {
        assert!(chunk.len() <= capacity);
        assert!(!chunk.is_empty());
    }
}

#[test]
fn test_chunk_count_is_ceiling() {
    let input = tokens(5_000);
    let capacity = 700;
    let expected = 5_000usize.div_ceil(capacity);
    assert_eq!(plan_chunks(&input, capacity).len(), expected);
}

#[test]
fn test_exact_division_has_no_trailing_empty_chunk() {
    let input = tokens(9_000);
    let chunks = plan_chunks(&input, 3_000);

    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|c| c.len() == 3_000));
}

#[test]
fn test_input_shorter_than_capacity_is_one_chunk() {
    let input = tokens(42);
    let chunks = plan_chunks(&input, 3_000);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0], &input[..]);
}

#[test]
fn test_empty_input_yields_zero_chunks() {
    let chunks = plan_chunks(&[], 3_000);
    assert!(chunks.is_empty());
}

#[test]
fn test_zero_capacity_yields_zero_chunks_without_panicking() {
    let input = tokens(10);
    assert!(plan_chunks(&input, 0).is_empty());
}

#[test]
fn test_ten_thousand_tokens_at_capacity_three_thousand() {
    let input = tokens(10_000);
    let chunks = plan_chunks(&input, 3_000);

    let lens: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
    assert_eq!(lens, vec![3_000, 3_000, 3_000, 1_000]);
}

#[test]
fn test_budget_capacity_subtracts_all_overhead() {
    let b = budget(8192, 120, 30, 500);
    assert_eq!(b.chunk_capacity().unwrap(), 8192 - 120 - 30 - 500);
}

#[test]
fn test_budget_with_no_room_is_a_config_error() {
    let b = budget(1000, 600, 0, 400);
    assert!(matches!(
        b.chunk_capacity(),
        Err(ConfigError::NoChunkCapacity { .. })
    ));
}

#[test]
fn test_budget_overhead_larger_than_context_is_a_config_error() {
    let b = budget(1000, 900, 200, 500);
    assert!(matches!(
        b.chunk_capacity(),
        Err(ConfigError::NoChunkCapacity { .. })
    ));
}
