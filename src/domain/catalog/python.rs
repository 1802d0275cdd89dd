//! Python starters: FastAPI, Django

use crate::domain::entities::{TemplateDefinition, TemplateFile};

pub const FASTAPI: TemplateDefinition = TemplateDefinition::new(
    "fastapi",
    "FastAPI",
    &[
        TemplateFile::new(
            "main.py",
            r#"from fastapi import FastAPI

app = FastAPI()

@app.get('/')
def read_root():
    return {'status': 'ok', 'message': 'Hello LocalX'}
"#,
        ),
        TemplateFile::new("requirements.txt", "fastapi\nuvicorn\n"),
    ],
);

pub const DJANGO: TemplateDefinition = TemplateDefinition::new(
    "django",
    "Django",
    &[
        TemplateFile::new(
            "manage.py",
            r#"import os
import sys

def main():
    os.environ.setdefault('DJANGO_SETTINGS_MODULE', 'localx_project.settings')
    from django.core.management import execute_from_command_line
    execute_from_command_line(sys.argv)

if __name__ == '__main__':
    main()
"#,
        ),
        TemplateFile::new("requirements.txt", "Django\n"),
        TemplateFile::new("localx_project/__init__.py", ""),
        TemplateFile::new(
            "localx_project/settings.py",
            r#"from pathlib import Path

BASE_DIR = Path(__file__).resolve().parent.parent

SECRET_KEY = 'localx-secret-key'
DEBUG = True
ALLOWED_HOSTS = ['*']

INSTALLED_APPS = [
    'django.contrib.admin',
    'django.contrib.auth',
    'django.contrib.contenttypes',
    'django.contrib.sessions',
    'django.contrib.messages',
    'django.contrib.staticfiles',
]

MIDDLEWARE = [
    'django.middleware.security.SecurityMiddleware',
    'django.contrib.sessions.middleware.SessionMiddleware',
    'django.middleware.common.CommonMiddleware',
    'django.middleware.csrf.CsrfViewMiddleware',
    'django.contrib.auth.middleware.AuthenticationMiddleware',
    'django.contrib.messages.middleware.MessageMiddleware',
    'django.middleware.clickjacking.XFrameOptionsMiddleware',
]

ROOT_URLCONF = 'localx_project.urls'

TEMPLATES = [
    {
        'BACKEND': 'django.template.backends.django.DjangoTemplates',
        'DIRS': [],
        'APP_DIRS': True,
        'OPTIONS': {
            'context_processors': [
                'django.template.context_processors.request',
                'django.contrib.auth.context_processors.auth',
                'django.contrib.messages.context_processors.messages',
            ],
        },
    },
]

WSGI_APPLICATION = 'localx_project.wsgi.application'

DATABASES = {
    'default': {
        'ENGINE': 'django.db.backends.sqlite3',
        'NAME': BASE_DIR / 'db.sqlite3',
    }
}

LANGUAGE_CODE = 'en-us'
TIME_ZONE = 'UTC'
USE_I18N = True
USE_TZ = True

STATIC_URL = 'static/'
DEFAULT_AUTO_FIELD = 'django.db.models.BigAutoField'
"#,
        ),
        TemplateFile::new(
            "localx_project/urls.py",
            r#"from django.contrib import admin
from django.urls import path
from django.http import HttpResponse

def home(_request):
    return HttpResponse('Hello LocalX Django')

urlpatterns = [
    path('admin/', admin.site.urls),
    path('', home),
]
"#,
        ),
        TemplateFile::new(
            "localx_project/asgi.py",
            r#"import os
from django.core.asgi import get_asgi_application

os.environ.setdefault('DJANGO_SETTINGS_MODULE', 'localx_project.settings')
application = get_asgi_application()
"#,
        ),
        TemplateFile::new(
            "localx_project/wsgi.py",
            r#"import os
from django.core.wsgi import get_wsgi_application

os.environ.setdefault('DJANGO_SETTINGS_MODULE', 'localx_project.settings')
application = get_wsgi_application()
"#,
        ),
    ],
);
