//! User-facing text of the login screen.
//!
//! The panel is operated in Portuguese, so the strings stay in Portuguese.

pub const LOGIN_SUCCESS_TITLE: &str = "Login realizado com sucesso!";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Bem-vindo ao painel administrativo.";
pub const LOGIN_FAILURE_TITLE: &str = "Erro no login";
pub const LOGIN_FAILURE_FALLBACK: &str = "Credenciais inválidas.";

pub const HEALTH_RESTORED_TITLE: &str = "Conexão Restaurada";
pub const HEALTH_RESTORED_MESSAGE: &str = "Servidor está disponível novamente.";
pub const HEALTH_DOWN_TITLE: &str = "Servidor Indisponível";
pub const HEALTH_DOWN_MESSAGE: &str =
    "O servidor ainda não está respondendo. Tente novamente em alguns instantes.";
pub const HEALTH_PROBE_FAILED_TITLE: &str = "Erro de Conexão";
pub const HEALTH_PROBE_FAILED_MESSAGE: &str = "Não foi possível verificar o status do servidor.";

pub const SUBMIT_LABEL: &str = "Entrar";
pub const SUBMIT_LABEL_LOADING: &str = "Entrando...";
pub const RETRY_LABEL: &str = "Tentar Novamente";
pub const RETRY_LABEL_LOADING: &str = "Verificando...";

pub const STATUS_ONLINE: &str = "Sistema Online e Seguro";
pub const STATUS_CHECKING: &str = "Verificando Servidor...";

pub const SERVER_UNAVAILABLE_MESSAGE: &str =
    "O servidor não está respondendo. Isso pode acontecer durante manutenções ou atualizações.";
pub const SUPPORT_HINT: &str = "Se o problema persistir, entre em contato com o suporte técnico.";
