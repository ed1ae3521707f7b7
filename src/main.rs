// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Yobatis 文档站点服务器
//!
//! 基于 Tokio 运行时的多线程 HTTP/1.1 服务器，提供 Yobatis 的文档页面：
//! - 页面路由：`/install`、`/config`、`/code-intro`、`/usage`，其余路径回退到安装页
//! - `/static/` 下的静态资源，带 LRU 缓存
//! - 按 `Accept`、`Accept-Encoding`、`X-Requested-With` 进行内容协商
//! - 后台管理控制台（stdin 指令交互）

use yobatis_docs::{
    cache::FileCache,
    config::Config,
    param::{DEFAULT_CONFIG, LOG_CONFIG},
    request::Request,
    response::Response,
    route::Route,
};

use log::{debug, error, info, warn, LevelFilter};
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};
use tokio::{
    io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader},
    net::{TcpListener, TcpStream},
    runtime::Builder,
    sync::watch,
    time::timeout,
};

use std::{
    io,
    net::{Ipv4Addr, SocketAddrV4},
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc, Mutex,
    },
    time::{Duration, Instant},
};

/// 单个请求报文的读取上限
const REQUEST_BUFFER_SIZE: usize = 8192;

/// 客户端发送请求报文的最长等待时间
const READ_TIMEOUT: Duration = Duration::from_secs(10);

fn main() -> io::Result<()> {
    init_logging();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = Config::from_toml(&config_path);
    info!("配置文件已载入：{}", config_path);
    info!("静态资源目录: {}", config.www_root());

    let runtime = Builder::new_multi_thread()
        .worker_threads(config.worker_threads())
        .enable_all()
        .build()?;
    info!("Tokio运行时已启动，工作线程数：{}", config.worker_threads());

    let result = runtime.block_on(serve(config));
    if let Err(e) = &result {
        error!("服务器异常退出：{}", e);
    }
    result
}

/// 加载 log4rs 的 YAML 配置，失败时退回到仅输出到控制台的配置
fn init_logging() {
    let err = match log4rs::init_file(LOG_CONFIG, Default::default()) {
        Ok(()) => return,
        Err(e) => e,
    };
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info));
    match config {
        Ok(c) => {
            if log4rs::init_config(c).is_ok() {
                warn!("无法加载{}：{}，改用控制台日志", LOG_CONFIG, err);
            }
        }
        Err(e) => eprintln!("无法初始化日志系统：{}", e),
    }
}

async fn serve(config: Config) -> io::Result<()> {
    let port = config.port();
    let address = match config.local() {
        true => Ipv4Addr::new(127, 0, 0, 1),
        false => Ipv4Addr::new(0, 0, 0, 0),
    };
    let socket = SocketAddrV4::new(address, port);
    let listener = match TcpListener::bind(socket).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("无法绑定{}，错误：{}", socket, e);
            return Err(e);
        }
    };
    info!("服务端在{}上监听Socket连接", socket);

    let cache = Arc::new(Mutex::new(FileCache::from_capacity(config.cache_size())));
    let config = Arc::new(config);
    let active_connection = Arc::new(AtomicU32::new(0));
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn(console(shutdown_tx, Arc::clone(&active_connection)));

    let mut id: u128 = 0;
    loop {
        let (mut stream, addr) = tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok(pair) => pair,
                Err(e) => {
                    warn!("接受连接失败：{}", e);
                    continue;
                }
            },
            Ok(()) = shutdown_rx.changed() => {
                info!("主循环接收到停机指令，正在退出...");
                break;
            }
        };
        debug!("[ID{}]新的连接：{}", id, addr);

        let active_connection = Arc::clone(&active_connection);
        let cache = Arc::clone(&cache);
        let config = Arc::clone(&config);
        tokio::spawn(async move {
            active_connection.fetch_add(1, Ordering::SeqCst);
            handle_connection(&mut stream, id, &cache, &config).await;
            active_connection.fetch_sub(1, Ordering::SeqCst);
        });
        id += 1;
    }
    Ok(())
}

/// 后台管理控制台：从 stdin 读取运维指令
async fn console(shutdown: watch::Sender<bool>, active_connection: Arc<AtomicU32>) {
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut input = String::new();
    loop {
        input.clear();
        match reader.read_line(&mut input).await {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        match input.trim() {
            "stop" => {
                println!("停机指令已激活，服务器将停止接受新连接...");
                let _ = shutdown.send(true);
                break;
            }
            "status" => {
                println!("== Docs Server 状态 ===");
                println!("当前活跃连接数: {}", active_connection.load(Ordering::SeqCst));
                println!("======================");
            }
            "routes" => {
                println!("== 页面路由 ==");
                for route in Route::ALL {
                    println!("{:<12} {}", route.path(), route.title());
                }
                println!("{:<12} {}", "*", Route::FALLBACK.path());
                println!("==============");
            }
            "help" => {
                println!("== Docs Server Help ==");
                println!("stop   - 发出停机信号");
                println!("status - 查看当前服务器运行状态");
                println!("routes - 列出页面路由");
                println!("help   - 显示此帮助信息");
                println!("======================");
            }
            "" => {}
            cmd => println!("无效的命令：{}", cmd),
        }
    }
}

/// 处理单个 TCP 连接：读取请求、生成响应并写回，然后关闭连接。
async fn handle_connection(
    stream: &mut TcpStream,
    id: u128,
    cache: &Arc<Mutex<FileCache>>,
    config: &Config,
) {
    let mut buffer = vec![0; REQUEST_BUFFER_SIZE];
    let n = match timeout(READ_TIMEOUT, stream.read(&mut buffer)).await {
        Ok(Ok(0)) => return,
        Ok(Ok(n)) => n,
        Ok(Err(e)) => {
            error!("[ID{}]读取TCPStream时遇到错误: {}", id, e);
            return;
        }
        Err(_) => {
            warn!("[ID{}]等待请求超时，关闭连接", id);
            return;
        }
    };
    debug!("[ID{}]HTTP请求接收完毕，{} bytes", id, n);

    let start_time = Instant::now();
    let request = match Request::try_from(&buffer[..n], id) {
        Ok(req) => req,
        Err(e) => {
            warn!("[ID{}]解析HTTP请求失败: {}，返回400", id, e);
            write_response(stream, id, &Response::bad_request(id)).await;
            return;
        }
    };

    let response = Response::from(&request, id, cache, config);
    debug!(
        "[ID{}]HTTP响应构建完成，服务端用时{}ms。",
        id,
        start_time.elapsed().as_millis()
    );

    info!(
        "[ID{}] {}, {}, {}, {}, {}, {}",
        id,
        request.version(),
        request.path(),
        request.method(),
        response.status_code(),
        response.information(),
        request.user_agent(),
    );

    write_response(stream, id, &response).await;
}

async fn write_response(stream: &mut TcpStream, id: u128, response: &Response) {
    let bytes = response.as_bytes();
    debug!("[ID{}]发送响应，长度: {}", id, bytes.len());
    if let Err(e) = stream.write_all(&bytes).await {
        error!("[ID{}]发送响应失败: {}", id, e);
        return;
    }
    let _ = stream.flush().await;
}
