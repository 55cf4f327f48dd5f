// ==========================================
// 设备租赁库存盘点系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型（输入形状前置校验）
// 说明: 推导本身无硬失败 —— 非法数值一律修正并告警,
//       这里只覆盖输入形状不满足前置条件的情况
// ==========================================

use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因（可解释性）
#[derive(Error, Debug)]
pub enum ApiError {
    /// 输入形状违反前置条件（如散装材料携带单元清单）
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = ApiError::InvalidInput("散装材料不应携带单元清单".to_string());
        assert!(err.to_string().contains("无效输入"));
        assert!(err.to_string().contains("单元清单"));
    }

    #[test]
    fn test_anyhow_passthrough() {
        let err: ApiError = anyhow::anyhow!("caller supplied failure").into();
        assert!(err.to_string().contains("caller supplied failure"));
    }
}
