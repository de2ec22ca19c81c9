//! Deployment artifact templates
//!
//! Templates are data: fixed strings with named placeholders, each paired
//! with a typed parameter record whose `render` performs the substitution.
//! Keeping the parameters typed avoids stringly-typed formatting mistakes.

/// Container build file for Python projects
pub const PYTHON_DOCKERFILE: &str = "\
FROM python:3.11-slim
WORKDIR /app
COPY . /app
{install_commands}CMD [\"python\", \"{entry_point}\"]
";

/// Compose file for Python projects; the service port is fixed at 5000
pub const PYTHON_DOCKER_COMPOSE: &str = "\
version: '3.8'

services:
  app:
    build: .
    ports:
      - \"5000:5000\"
    command: [\"python\", \"{entry_point}\"]
";

/// Two-stage container build file for frontend projects: build with node,
/// serve the build output from nginx with an SPA fallback for unmatched routes
pub const FRONTEND_DOCKERFILE: &str = r#"FROM node:18-alpine AS builder

WORKDIR /app
COPY package*.json ./
RUN npm install
COPY . .
{build_command}

FROM nginx:alpine
COPY --from=builder /app/{build_output} /usr/share/nginx/html
RUN echo 'server { \
    listen 80; \
    server_name localhost; \
    location / { \
        root /usr/share/nginx/html; \
        index index.html index.htm; \
        try_files $uri $uri/ /index.html; \
    } \
}' > /etc/nginx/conf.d/default.conf
EXPOSE 80
CMD ["nginx", "-g", "daemon off;"]
"#;

/// Compose file for frontend projects; the static service port is fixed at 80
pub const FRONTEND_DOCKER_COMPOSE: &str = "\
version: '3.8'

services:
  app:
    build: .
    ports:
      - \"80:80\"
";

pub const PYTHON_K8S_DEPLOYMENT: &str = "\
apiVersion: apps/v1
kind: Deployment
metadata:
  name: python-app
spec:
  replicas: 1
  selector:
    matchLabels:
      app: python-app
  template:
    metadata:
      labels:
        app: python-app
    spec:
      containers:
      - name: python-app
        image: pythonapp
        ports:
        - containerPort: 5000
";

pub const PYTHON_K8S_SERVICE: &str = "\
apiVersion: v1
kind: Service
metadata:
  name: python-service
spec:
  selector:
    app: python-app
  ports:
    - protocol: TCP
      port: 80
      targetPort: 5000
  type: LoadBalancer
";

pub const FRONTEND_K8S_DEPLOYMENT: &str = "\
apiVersion: apps/v1
kind: Deployment
metadata:
  name: react-app
spec:
  replicas: 1
  selector:
    matchLabels:
      app: react-app
  template:
    metadata:
      labels:
        app: react-app
    spec:
      containers:
      - name: react-app
        image: reactapp
        ports:
        - containerPort: 80
";

pub const FRONTEND_K8S_SERVICE: &str = "\
apiVersion: v1
kind: Service
metadata:
  name: react-service
spec:
  selector:
    app: react-app
  ports:
    - protocol: TCP
      port: 80
      targetPort: 80
  type: LoadBalancer
";

/// Parameters for [`PYTHON_DOCKERFILE`]
#[derive(Debug, Clone)]
pub struct PythonDockerfileParams<'a> {
    /// `RUN pip install ...` line (with trailing newline), or empty when the
    /// project has no non-empty requirements.txt
    pub install_commands: &'a str,
    /// Resolved entry point, forward-slash relative path
    pub entry_point: &'a str,
}

impl PythonDockerfileParams<'_> {
    pub fn render(&self) -> String {
        PYTHON_DOCKERFILE
            .replace("{install_commands}", self.install_commands)
            .replace("{entry_point}", self.entry_point)
    }
}

/// Parameters for [`PYTHON_DOCKER_COMPOSE`]
#[derive(Debug, Clone)]
pub struct PythonComposeParams<'a> {
    pub entry_point: &'a str,
}

impl PythonComposeParams<'_> {
    pub fn render(&self) -> String {
        PYTHON_DOCKER_COMPOSE.replace("{entry_point}", self.entry_point)
    }
}

/// Parameters for [`FRONTEND_DOCKERFILE`]
#[derive(Debug, Clone)]
pub struct FrontendDockerfileParams<'a> {
    /// Full `RUN ...` build step
    pub build_command: &'a str,
    /// Directory the build emits static files into
    pub build_output: &'a str,
}

impl FrontendDockerfileParams<'_> {
    pub fn render(&self) -> String {
        FRONTEND_DOCKERFILE
            .replace("{build_command}", self.build_command)
            .replace("{build_output}", self.build_output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_dockerfile_render() {
        let rendered = PythonDockerfileParams {
            install_commands: "RUN pip install -r requirements.txt\n",
            entry_point: "main.py",
        }
        .render();

        assert!(rendered.starts_with("FROM python:3.11-slim"));
        assert!(rendered.contains("RUN pip install -r requirements.txt"));
        assert!(rendered.contains("CMD [\"python\", \"main.py\"]"));
        assert!(!rendered.contains('{'));
    }

    #[test]
    fn test_python_dockerfile_without_install_step() {
        let rendered = PythonDockerfileParams {
            install_commands: "",
            entry_point: "app.py",
        }
        .render();

        assert!(!rendered.contains("pip install"));
        assert!(rendered.contains("COPY . /app\nCMD [\"python\", \"app.py\"]"));
    }

    #[test]
    fn test_python_compose_render() {
        let rendered = PythonComposeParams {
            entry_point: "srv/start.py",
        }
        .render();

        assert!(rendered.contains("- \"5000:5000\""));
        assert!(rendered.contains("command: [\"python\", \"srv/start.py\"]"));
    }

    #[test]
    fn test_frontend_dockerfile_render() {
        let rendered = FrontendDockerfileParams {
            build_command: "RUN npm run build",
            build_output: "build",
        }
        .render();

        assert!(rendered.contains("FROM node:18-alpine AS builder"));
        assert!(rendered.contains("RUN npm run build\n"));
        assert!(rendered.contains("COPY --from=builder /app/build /usr/share/nginx/html"));
        assert!(rendered.contains("try_files $uri $uri/ /index.html"));
        assert!(rendered.contains("EXPOSE 80"));
    }

    #[test]
    fn test_frontend_compose_is_static() {
        assert!(FRONTEND_DOCKER_COMPOSE.contains("- \"80:80\""));
        assert!(!FRONTEND_DOCKER_COMPOSE.contains('{'));
    }

    #[test]
    fn test_k8s_templates_have_no_placeholders() {
        for template in [
            PYTHON_K8S_DEPLOYMENT,
            PYTHON_K8S_SERVICE,
            FRONTEND_K8S_DEPLOYMENT,
            FRONTEND_K8S_SERVICE,
        ] {
            assert!(!template.contains('{'));
            assert!(!template.contains('}'));
        }
    }
}
