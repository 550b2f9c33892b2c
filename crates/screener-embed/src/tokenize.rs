use anyhow::{anyhow, Result};
use candle_core::{Device, Tensor};
use std::borrow::Cow;
use tokenizers::Tokenizer;

/// Drop the truncation and padding a `tokenizer.json` may carry (MiniLM ships
/// `max_length: 128` with fixed padding), so that the `max_len` given to
/// [`tokenize_batch`] is the only length rule.
pub fn clear_builtin_limits(tokenizer: &mut Tokenizer) -> Result<()> {
    tokenizer.with_padding(None);
    tokenizer
        .with_truncation(None)
        .map_err(|e| anyhow!("Failed to disable tokenizer truncation: {}", e))?;
    Ok(())
}

fn without_builtin_limits(tokenizer: &Tokenizer) -> Result<Cow<'_, Tokenizer>> {
    if tokenizer.get_truncation().is_none() && tokenizer.get_padding().is_none() {
        return Ok(Cow::Borrowed(tokenizer));
    }
    tracing::debug!("tokenizer carries its own truncation/padding; ignoring it");
    let mut owned = tokenizer.clone();
    clear_builtin_limits(&mut owned)?;
    Ok(Cow::Owned(owned))
}

/// Encode `texts` with special tokens, truncate each to `max_len` (keeping
/// the closing special token) and right-pad with `pad_id` to the longest
/// sequence in the batch. Truncation or padding configured on the tokenizer
/// itself is ignored.
///
/// Returns `(input_ids, attention_mask)`, both `[B, T]` `u32` tensors.
pub fn tokenize_batch(
    tokenizer: &Tokenizer,
    texts: &[String],
    max_len: usize,
    pad_id: u32,
    device: &Device,
) -> Result<(Tensor, Tensor)> {
    let tokenizer = without_builtin_limits(tokenizer)?;
    let mut rows = Vec::with_capacity(texts.len());
    for text in texts {
        let enc = tokenizer
            .encode(text.as_str(), true)
            .map_err(|e| anyhow!("Tokenization failed: {}", e))?;
        let mut ids = enc.get_ids().to_vec();
        let mut mask = enc.get_attention_mask().to_vec();
        if ids.len() > max_len {
            // Keep the closing special token ([SEP]) in the last slot.
            let last = ids[ids.len() - 1];
            ids.truncate(max_len);
            mask.truncate(max_len);
            if let Some(slot) = ids.last_mut() {
                *slot = last;
            }
        }
        rows.push((ids, mask));
    }

    let seq_len = rows.iter().map(|(ids, _)| ids.len()).max().unwrap_or(0).max(1);
    let mut all_ids = Vec::with_capacity(rows.len() * seq_len);
    let mut all_mask = Vec::with_capacity(rows.len() * seq_len);
    for (ids, mask) in rows {
        let pad = seq_len - ids.len();
        all_ids.extend(ids.into_iter().chain(std::iter::repeat(pad_id).take(pad)));
        all_mask.extend(mask.into_iter().chain(std::iter::repeat(0).take(pad)));
    }

    let input_ids = Tensor::from_vec(all_ids, (texts.len(), seq_len), device)?;
    let attention_mask = Tensor::from_vec(all_mask, (texts.len(), seq_len), device)?;
    Ok((input_ids, attention_mask))
}
