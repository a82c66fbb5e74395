//! Purpose: Built-in reference solutions for the registry's problem schemas.
//! Exports: `routine_for`.
//! Role: Supplies the routine half of each built-in problem; the engine treats
//! these exactly like externally linked candidate code.
//! Invariants: Routines communicate failure by `Err` or panic, never by exiting.
//! Invariants: Argument kinds are guaranteed by the binder; the `expect_arg`
//! guard only fires if a schema and its routine disagree.
use std::collections::{HashMap, HashSet, VecDeque};

use marshalite::api::{Error, ErrorKind, LinkedList, NativeValue, Routine};

pub fn routine_for(name: &str) -> Option<Box<dyn Routine>> {
    let routine: fn(&mut [NativeValue]) -> Result<NativeValue, Error> = match name {
        "two-sum" => two_sum,
        "coin-change" => coin_change,
        "sliding-window-maximum" => sliding_window_maximum,
        "house-robber" => house_robber,
        "edit-distance" => edit_distance,
        "word-break" => word_break,
        "find-all-anagrams-in-a-string" => find_all_anagrams,
        "fizzbuzz" => fizzbuzz,
        "spiral-matrix" => spiral_matrix,
        "rotate-image" => rotate_image,
        "merge-two-sorted-lists" => merge_two_sorted_lists,
        "add-two-numbers" => add_two_numbers,
        "invert-binary-tree" => invert_binary_tree,
        "maximum-depth-of-binary-tree" => maximum_depth,
        _ => return None,
    };
    Some(Box::new(routine))
}

fn expect_arg<T>(value: Option<T>, what: &str) -> Result<T, Error> {
    value.ok_or_else(|| {
        Error::new(ErrorKind::Routine).with_message(format!("argument is not {what}"))
    })
}

fn two_sum(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let nums = expect_arg(args[0].as_int_seq(), "an int sequence")?;
    let target = expect_arg(args[1].as_int(), "an int")?;
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for (idx, &num) in nums.iter().enumerate() {
        if let Some(&prev) = seen.get(&(target - num)) {
            return Ok(NativeValue::IntSeq(vec![prev as i64, idx as i64]));
        }
        seen.insert(num, idx);
    }
    Ok(NativeValue::IntSeq(Vec::new()))
}

fn coin_change(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let coins = expect_arg(args[0].as_int_seq(), "an int sequence")?;
    let amount = expect_arg(args[1].as_int(), "an int")?;
    if amount < 0 {
        return Ok(NativeValue::Int(-1));
    }
    let amount = amount as usize;
    const UNSET: i64 = i64::MAX;
    let mut dp = vec![UNSET; amount + 1];
    dp[0] = 0;
    for value in 1..=amount {
        for &coin in coins {
            if coin > 0 && (coin as usize) <= value {
                let prev = dp[value - coin as usize];
                if prev != UNSET && prev + 1 < dp[value] {
                    dp[value] = prev + 1;
                }
            }
        }
    }
    Ok(NativeValue::Int(if dp[amount] == UNSET {
        -1
    } else {
        dp[amount]
    }))
}

fn sliding_window_maximum(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let nums = expect_arg(args[0].as_int_seq(), "an int sequence")?;
    let k = expect_arg(args[1].as_int(), "an int")?;
    if nums.is_empty() || k <= 0 {
        return Ok(NativeValue::IntSeq(Vec::new()));
    }
    let k = k as usize;
    let mut window: VecDeque<usize> = VecDeque::new();
    let mut out = Vec::new();
    for (idx, &num) in nums.iter().enumerate() {
        while window.front().is_some_and(|&front| front + k <= idx) {
            window.pop_front();
        }
        while window.back().is_some_and(|&back| nums[back] <= num) {
            window.pop_back();
        }
        window.push_back(idx);
        if idx + 1 >= k {
            if let Some(&front) = window.front() {
                out.push(nums[front]);
            }
        }
    }
    Ok(NativeValue::IntSeq(out))
}

fn house_robber(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let nums = expect_arg(args[0].as_int_seq(), "an int sequence")?;
    let mut take = 0_i64;
    let mut skip = 0_i64;
    for &num in nums {
        let best = take.max(skip);
        take = skip + num;
        skip = best;
    }
    Ok(NativeValue::Int(take.max(skip)))
}

fn edit_distance(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let word1: Vec<char> = expect_arg(args[0].as_str(), "a string")?.chars().collect();
    let word2: Vec<char> = expect_arg(args[1].as_str(), "a string")?.chars().collect();
    let mut prev: Vec<i64> = (0..=word2.len()).map(|j| j as i64).collect();
    for (i, &a) in word1.iter().enumerate() {
        let mut row = vec![(i + 1) as i64];
        for (j, &b) in word2.iter().enumerate() {
            let substitute = if a == b { prev[j] } else { prev[j] + 1 };
            row.push(substitute.min(prev[j + 1] + 1).min(row[j] + 1));
        }
        prev = row;
    }
    Ok(NativeValue::Int(prev[word2.len()]))
}

fn word_break(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let s = expect_arg(args[0].as_str(), "a string")?;
    let dict = expect_arg(args[1].as_str_seq(), "a string sequence")?;
    let words: HashSet<&str> = dict.iter().map(String::as_str).collect();
    let mut reachable = vec![false; s.len() + 1];
    reachable[0] = true;
    for end in 1..=s.len() {
        for start in 0..end {
            if reachable[start] && s.get(start..end).is_some_and(|piece| words.contains(piece)) {
                reachable[end] = true;
                break;
            }
        }
    }
    Ok(NativeValue::Bool(reachable[s.len()]))
}

fn find_all_anagrams(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let s = expect_arg(args[0].as_str(), "a string")?.as_bytes();
    let p = expect_arg(args[1].as_str(), "a string")?.as_bytes();
    if p.is_empty() || s.len() < p.len() {
        return Ok(NativeValue::IntSeq(Vec::new()));
    }
    let mut need = [0_i32; 256];
    for &byte in p {
        need[byte as usize] += 1;
    }
    let mut have = [0_i32; 256];
    let mut out = Vec::new();
    for (idx, &byte) in s.iter().enumerate() {
        have[byte as usize] += 1;
        if idx >= p.len() {
            have[s[idx - p.len()] as usize] -= 1;
        }
        if idx + 1 >= p.len() && have == need {
            out.push((idx + 1 - p.len()) as i64);
        }
    }
    Ok(NativeValue::IntSeq(out))
}

fn fizzbuzz(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let n = expect_arg(args[0].as_int(), "an int")?;
    let mut out = Vec::new();
    for i in 1..=n {
        let entry = if i % 15 == 0 {
            "FizzBuzz".to_string()
        } else if i % 3 == 0 {
            "Fizz".to_string()
        } else if i % 5 == 0 {
            "Buzz".to_string()
        } else {
            i.to_string()
        };
        out.push(entry);
    }
    Ok(NativeValue::StrSeq(out))
}

fn spiral_matrix(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let rows = expect_arg(args[0].as_matrix(), "a matrix")?;
    if rows.is_empty() || rows[0].is_empty() {
        return Ok(NativeValue::IntSeq(Vec::new()));
    }
    let mut top = 0;
    let mut bottom = rows.len();
    let mut left = 0;
    let mut right = rows[0].len();
    let mut out = Vec::new();
    while top < bottom && left < right {
        for col in left..right {
            out.push(rows[top][col]);
        }
        top += 1;
        for row in top..bottom {
            out.push(rows[row][right - 1]);
        }
        right -= 1;
        if top < bottom {
            for col in (left..right).rev() {
                out.push(rows[bottom - 1][col]);
            }
            bottom -= 1;
        }
        if left < right {
            for row in (top..bottom).rev() {
                out.push(rows[row][left]);
            }
            left += 1;
        }
    }
    Ok(NativeValue::IntSeq(out))
}

fn rotate_image(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let rows = expect_arg(args[0].as_matrix_mut(), "a matrix")?;
    let n = rows.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let held = rows[i][j];
            rows[i][j] = rows[j][i];
            rows[j][i] = held;
        }
    }
    for row in rows.iter_mut() {
        row.reverse();
    }
    Ok(NativeValue::Unit)
}

fn merge_two_sorted_lists(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let first = expect_arg(args[0].as_list(), "a linked list")?.values();
    let second = expect_arg(args[1].as_list(), "a linked list")?.values();
    let mut merged = Vec::with_capacity(first.len() + second.len());
    let mut i = 0;
    let mut j = 0;
    while i < first.len() && j < second.len() {
        if first[i] <= second[j] {
            merged.push(first[i]);
            i += 1;
        } else {
            merged.push(second[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&first[i..]);
    merged.extend_from_slice(&second[j..]);
    Ok(NativeValue::List(LinkedList::from_values(&merged)))
}

fn add_two_numbers(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let first = expect_arg(args[0].as_list(), "a linked list")?.values();
    let second = expect_arg(args[1].as_list(), "a linked list")?.values();
    let mut digits = Vec::new();
    let mut carry = 0;
    let mut i = 0;
    let mut j = 0;
    while i < first.len() || j < second.len() || carry > 0 {
        let mut sum = carry;
        if i < first.len() {
            sum += first[i];
            i += 1;
        }
        if j < second.len() {
            sum += second[j];
            j += 1;
        }
        digits.push(sum % 10);
        carry = sum / 10;
    }
    Ok(NativeValue::List(LinkedList::from_values(&digits)))
}

fn invert_binary_tree(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let tree = expect_arg(args[0].as_tree(), "a binary tree")?;
    let mut inverted = tree.clone();
    inverted.invert();
    Ok(NativeValue::Tree(inverted))
}

fn maximum_depth(args: &mut [NativeValue]) -> Result<NativeValue, Error> {
    let tree = expect_arg(args[0].as_tree(), "a binary tree")?;
    Ok(NativeValue::Int(tree.depth() as i64))
}
