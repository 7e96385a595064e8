use super::core::Language;
use rand::seq::SliceRandom;

impl Language {
    /// Get `num` random words. Words only repeat once the list is exhausted.
    pub fn get_random(&self, num: usize) -> Vec<String> {
        let rng = &mut rand::thread_rng();
        let mut picked = Vec::with_capacity(num);

        while picked.len() < num && !self.words.is_empty() {
            let take = (num - picked.len()).min(self.words.len());
            let mut batch: Vec<String> = self.words.choose_multiple(rng, take).cloned().collect();
            batch.shuffle(rng);
            picked.extend(batch);
        }

        picked
    }
}
