/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - API key の抽出は stateless なので、今は何も持たない
 *   (key の照合先などを追加するならここ)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
